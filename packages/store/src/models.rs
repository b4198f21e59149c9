//! # Domain models for users and patient drafts
//!
//! Defines the data structures shared by the session layer, the backend seams in
//! the `api` crate and the UI. All types are `Serialize + Deserialize` so they can
//! be persisted as JSON by [`crate::SessionStore`] or handed to a real backend
//! later without reshaping.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in identity: numeric `id`, display `name`, `email`, and a [`Role`]. Serialised with the same field names the browser app has always stored under the `"user"` key. |
//! | [`Role`] | Clinical role of a user, stored lowercase (`"doctor"`). |
//! | [`PatientDraft`] | An unsaved patient form. Required fields are plain strings, optional fields are `Option<String>` and stay `None` while blank. Serialised camelCase (`firstName`, `bloodType`, ...). |
//! | [`PatientField`] | Names one field of a draft. Used as the key of validation errors and to route form input to the right slot. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Name to greet the user with, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Nurse,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Admin => "Administrator",
        }
    }
}

/// One field of the patient-creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatientField {
    FirstName,
    LastName,
    Dob,
    Gender,
    Email,
    Phone,
    Address,
    BloodType,
    EmergencyContact,
    Notes,
}

impl PatientField {
    /// Every field, in form order.
    pub const ALL: [PatientField; 10] = [
        PatientField::FirstName,
        PatientField::LastName,
        PatientField::Dob,
        PatientField::Gender,
        PatientField::Email,
        PatientField::Phone,
        PatientField::Address,
        PatientField::BloodType,
        PatientField::EmergencyContact,
        PatientField::Notes,
    ];

    /// Stable wire/form name: `"firstName"`, `"bloodType"`, ...
    pub fn name(&self) -> &'static str {
        match self {
            PatientField::FirstName => "firstName",
            PatientField::LastName => "lastName",
            PatientField::Dob => "dob",
            PatientField::Gender => "gender",
            PatientField::Email => "email",
            PatientField::Phone => "phone",
            PatientField::Address => "address",
            PatientField::BloodType => "bloodType",
            PatientField::EmergencyContact => "emergencyContact",
            PatientField::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PatientField::FirstName => "First name",
            PatientField::LastName => "Last name",
            PatientField::Dob => "Date of birth",
            PatientField::Gender => "Gender",
            PatientField::Email => "Email",
            PatientField::Phone => "Phone number",
            PatientField::Address => "Address",
            PatientField::BloodType => "Blood type",
            PatientField::EmergencyContact => "Emergency contact",
            PatientField::Notes => "Notes",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            PatientField::FirstName
                | PatientField::LastName
                | PatientField::Dob
                | PatientField::Gender
                | PatientField::Phone
        )
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An in-progress, unsaved patient record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth as entered (`YYYY-MM-DD` from a date input).
    pub dob: String,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PatientDraft {
    /// Current value of a field; unset optional fields read as `""`.
    pub fn get(&self, field: PatientField) -> &str {
        match field {
            PatientField::FirstName => &self.first_name,
            PatientField::LastName => &self.last_name,
            PatientField::Dob => &self.dob,
            PatientField::Gender => &self.gender,
            PatientField::Phone => &self.phone,
            PatientField::Email => self.email.as_deref().unwrap_or_default(),
            PatientField::Address => self.address.as_deref().unwrap_or_default(),
            PatientField::BloodType => self.blood_type.as_deref().unwrap_or_default(),
            PatientField::EmergencyContact => {
                self.emergency_contact.as_deref().unwrap_or_default()
            }
            PatientField::Notes => self.notes.as_deref().unwrap_or_default(),
        }
    }

    /// Store a raw input value. Optional fields become `None` when blank.
    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PatientField::FirstName => self.first_name = value,
            PatientField::LastName => self.last_name = value,
            PatientField::Dob => self.dob = value,
            PatientField::Gender => self.gender = value,
            PatientField::Phone => self.phone = value,
            PatientField::Email => self.email = non_blank(value),
            PatientField::Address => self.address = non_blank(value),
            PatientField::BloodType => self.blood_type = non_blank(value),
            PatientField::EmergencyContact => self.emergency_contact = non_blank(value),
            PatientField::Notes => self.notes = non_blank(value),
        }
    }

    /// `"First Last"` with surrounding whitespace removed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_matches_stored_shape() {
        let user = User {
            id: 1,
            name: "Test User".to_string(),
            email: "doc@example.com".to_string(),
            role: Role::Doctor,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Test User","email":"doc@example.com","role":"doctor"}"#
        );
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            id: 1,
            name: "  ".to_string(),
            email: "doc@example.com".to_string(),
            role: Role::Nurse,
        };
        assert_eq!(user.display_name(), "doc@example.com");
    }

    #[test]
    fn test_blank_optional_fields_stay_none() {
        let mut draft = PatientDraft::default();
        draft.set(PatientField::Email, "   ");
        draft.set(PatientField::Notes, "");
        assert!(draft.email.is_none());
        assert!(draft.notes.is_none());

        draft.set(PatientField::Email, "jane@example.com");
        assert_eq!(draft.email.as_deref(), Some("jane@example.com"));
        assert_eq!(draft.get(PatientField::Email), "jane@example.com");

        draft.set(PatientField::Email, "");
        assert!(draft.email.is_none());
        assert_eq!(draft.get(PatientField::Email), "");
    }

    #[test]
    fn test_required_fields_keep_raw_input() {
        let mut draft = PatientDraft::default();
        draft.set(PatientField::FirstName, " Jane ");
        draft.set(PatientField::LastName, "Doe");
        assert_eq!(draft.first_name, " Jane ");
        assert_eq!(draft.full_name(), "Jane Doe");
    }

    #[test]
    fn test_draft_serializes_camel_case_without_empty_optionals() {
        let mut draft = PatientDraft::default();
        draft.set(PatientField::FirstName, "Jane");
        draft.set(PatientField::BloodType, "O+");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["bloodType"], "O+");
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_required_field_set() {
        let required: Vec<_> = PatientField::ALL
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name())
            .collect();
        assert_eq!(
            required,
            vec!["firstName", "lastName", "dob", "gender", "phone"]
        );
    }
}
