//! # API crate: backend seams for the healthcare dashboard
//!
//! Everything the UI treats as "the backend" goes through a trait defined here,
//! so the mocked behaviour the dashboard ships with can be swapped for a real
//! service without touching session persistence, the route guard, or the
//! patient form.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`AuthBackend`] (credential check, mocked by [`MockAuthBackend`]) and [`AuthService`], the explicitly constructed session service with an `initialize` / `login` / `logout` / `teardown` lifecycle |
//! | [`patients`] | Patient-draft validation rules and the [`PatientRepository`] seam, with the in-memory [`InMemoryPatients`] implementation |
//!
//! ## Errors
//!
//! Fallible operations return [`ApiError`]. Form validation is *not* an error
//! path: [`patients::validate`] returns a [`FieldErrors`] map the UI renders
//! inline.

use thiserror::Error;

pub mod auth;
pub mod patients;

pub use auth::{AuthBackend, AuthResponse, AuthService, Credentials, MockAuthBackend};
pub use patients::{validate, FieldErrors, InMemoryPatients, PatientRecord, PatientRepository};
pub use store::{PatientDraft, PatientField, Role, User};

/// Failure of a backend operation.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session storage failed: {0}")]
    Storage(#[from] store::StorageError),
    #[error("credentials rejected: {0}")]
    Rejected(String),
    #[error("patient draft has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
}
