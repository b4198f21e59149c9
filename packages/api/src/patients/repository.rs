//! # Patient repository seam
//!
//! [`PatientRepository`] is where a submitted [`PatientDraft`] leaves the UI.
//! The dashboard has no records service, so [`InMemoryPatients`] stands in: it
//! re-checks the draft, stamps it with an id and creation time, logs it, and
//! keeps it for the lifetime of the page so the Patients view can list it.
//!
//! Records are returned newest first.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::PatientDraft;
use uuid::Uuid;

use super::validation::validate;
use crate::ApiError;

/// A saved patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub draft: PatientDraft,
}

/// Async trait for storing and listing patients.
pub trait PatientRepository {
    fn save(
        &self,
        draft: PatientDraft,
    ) -> impl std::future::Future<Output = Result<PatientRecord, ApiError>>;
    fn list(&self) -> impl std::future::Future<Output = Vec<PatientRecord>>;
}

/// Page-lifetime patient list.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPatients {
    records: Arc<Mutex<Vec<PatientRecord>>>,
}

impl InMemoryPatients {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PatientRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PatientRepository for InMemoryPatients {
    async fn save(&self, draft: PatientDraft) -> Result<PatientRecord, ApiError> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            tracing::warn!("Refusing invalid patient draft: {:?}", errors.keys());
            return Err(ApiError::Invalid(errors));
        }

        let record = PatientRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            draft,
        };
        tracing::info!(
            "Saved patient {} ({})",
            record.draft.full_name(),
            record.id
        );
        self.lock().insert(0, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Vec<PatientRecord> {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::PatientField;

    fn draft(first: &str) -> PatientDraft {
        let mut draft = PatientDraft::default();
        draft.set(PatientField::FirstName, first);
        draft.set(PatientField::LastName, "Doe");
        draft.set(PatientField::Dob, "2000-01-01");
        draft.set(PatientField::Gender, "female");
        draft.set(PatientField::Phone, "555-0100");
        draft
    }

    #[tokio::test]
    async fn test_save_and_list_newest_first() {
        let repo = InMemoryPatients::new();
        assert!(repo.list().await.is_empty());

        let first = repo.save(draft("Jane")).await.unwrap();
        let second = repo.save(draft("John")).await.unwrap();
        assert_ne!(first.id, second.id);

        let records = repo.list().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].draft.first_name, "John");
        assert_eq!(records[1].draft.first_name, "Jane");
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let repo = InMemoryPatients::new();
        let view = repo.clone();
        repo.save(draft("Jane")).await.unwrap();
        assert_eq!(view.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_refused() {
        let repo = InMemoryPatients::new();
        let err = repo.save(draft("")).await.unwrap_err();
        match err {
            ApiError::Invalid(errors) => {
                assert!(errors.contains_key(&PatientField::FirstName));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(repo.list().await.is_empty());
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = PatientRecord {
            id: Uuid::nil(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            draft: draft("Jane"),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert!(json.get("createdAt").is_some());
    }
}
