//! # Patient-draft validation
//!
//! [`validate`] runs every rule against a [`PatientDraft`] and collects ALL
//! violations into a [`FieldErrors`] map (field → message), so the form can show
//! each problem next to its input in one pass.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | `firstName` | not blank | "First name is required" |
//! | `lastName` | not blank | "Last name is required" |
//! | `dob` | not blank | "Date of birth is required" |
//! | `gender` | not blank | "Gender is required" |
//! | `phone` | not blank | "Phone number is required" |
//! | `email` | if present, `something@domain.tld` | "Email is invalid" |
//!
//! Optional fields other than `email` are never checked.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use store::{PatientDraft, PatientField};

/// Validation messages keyed by the offending field, in form order.
pub type FieldErrors = BTreeMap<PatientField, String>;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^\S+@\S+\.\S+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Two-part address check: non-space local part, `@`, a domain with a dot.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Collect every rule violation in `draft`. Empty map means the draft is valid.
pub fn validate(draft: &PatientDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in PatientField::ALL {
        if field.is_required() && draft.get(field).trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        }
    }

    if let Some(email) = draft.email.as_deref() {
        if !email.trim().is_empty() && !is_valid_email(email) {
            errors.insert(PatientField::Email, "Email is invalid".to_string());
        }
    }

    errors
}
