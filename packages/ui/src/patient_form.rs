//! # Patient-creation form state
//!
//! [`PatientForm`] is the state machine behind [`crate::PatientModal`], kept free
//! of any UI types so it can be driven directly in tests.
//!
//! ```text
//!            set(field, value)            begin_submit() ok
//!   ┌────────── Editing ──────────────────────────────► Submitting(ticket)
//!   │             ▲   │ begin_submit() invalid              │
//!   │             │   └──► Editing (errors shown)           │ complete(ticket)
//!   │             └─────────────────────────────────────────┘ → draft handed out
//!   │ close() from any phase: draft discarded, ticket void
//! ```
//!
//! Tickets carry the form's generation. [`PatientForm::close`] bumps the
//! generation, so a delayed save that finishes after the modal was dismissed
//! presents a stale ticket and [`PatientForm::complete`] yields nothing.

use api::{validate, FieldErrors};
use store::{PatientDraft, PatientField};

/// Proof that a submission was accepted, valid until the form is closed or
/// completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Why [`PatientForm::begin_submit`] did not start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Validation failed; the same errors are now shown on the form.
    Invalid(FieldErrors),
    /// A submission is already in flight.
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientForm {
    draft: PatientDraft,
    errors: FieldErrors,
    /// Accepted draft and its ticket while Submitting.
    pending: Option<(SubmitTicket, PatientDraft)>,
    generation: u64,
}

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    pub fn value(&self, field: PatientField) -> &str {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: PatientField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> FormPhase {
        if self.pending.is_some() {
            FormPhase::Submitting
        } else {
            FormPhase::Editing
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == FormPhase::Submitting
    }

    /// Record input for one field and clear that field's error only.
    /// Ignored while a submission is in flight.
    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Validate and, if clean, move to Submitting.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors.clear();
        let ticket = SubmitTicket {
            generation: self.generation,
        };
        self.pending = Some((ticket, self.draft.clone()));
        Ok(ticket)
    }

    /// Finish a submission. Yields the accepted draft only if `ticket` is
    /// still current, then resets the form for its next opening.
    pub fn complete(&mut self, ticket: SubmitTicket) -> Option<PatientDraft> {
        match self.pending.take() {
            Some((current, draft)) if current == ticket => {
                self.reset();
                Some(draft)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Discard everything, including any in-flight submission.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = PatientDraft::default();
        self.errors.clear();
        self.pending = None;
        self.generation += 1;
    }
}
