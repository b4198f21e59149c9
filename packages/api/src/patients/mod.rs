//! Patient drafts: validation rules and the repository seam.

mod repository;
mod validation;

pub use repository::{InMemoryPatients, PatientRecord, PatientRepository};
pub use validation::{is_valid_email, validate, FieldErrors};
