use api::PatientRecord;
use dioxus::prelude::*;

use crate::dashboard::Tone;

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub title: String,
    pub detail: String,
    /// Person the entry is about; drives the avatar initials.
    pub subject: String,
    pub when: String,
    pub tone: Tone,
}

impl ActivityItem {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        detail: impl Into<String>,
        when: impl Into<String>,
        tone: Tone,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            detail: detail.into(),
            when: when.into(),
            tone,
        }
    }

    /// Up to two upper-case initials, `"John Doe"` → `"JD"`.
    pub fn initials(&self) -> String {
        self.subject
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// The dashboard's recent-activity list, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityFeed {
    pub entries: Vec<ActivityItem>,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self {
            entries: vec![
                ActivityItem::new(
                    "New patient registered",
                    "John Doe",
                    "John Doe was added to the system",
                    "2 hours ago",
                    Tone::Blue,
                ),
                ActivityItem::new(
                    "Appointment completed",
                    "Jane Smith",
                    "Jane Smith - General Checkup",
                    "4 hours ago",
                    Tone::Green,
                ),
                ActivityItem::new(
                    "Lab results uploaded",
                    "Bob Johnson",
                    "Bob Johnson - Blood Test Results",
                    "6 hours ago",
                    Tone::Purple,
                ),
            ],
        }
    }
}

impl ActivityFeed {
    pub fn record_new_patient(&mut self, record: &PatientRecord) {
        let name = record.draft.full_name();
        self.entries.insert(
            0,
            ActivityItem::new(
                "New patient registered",
                name.clone(),
                format!("{name} was added to the system"),
                "just now",
                Tone::Blue,
            ),
        );
    }
}

pub fn use_activity_feed() -> Signal<ActivityFeed> {
    use_context::<Signal<ActivityFeed>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{InMemoryPatients, PatientRepository};
    use store::{PatientDraft, PatientField};

    #[test]
    fn test_seeded_feed() {
        let feed = ActivityFeed::default();
        let initials: Vec<_> = feed.entries.iter().map(ActivityItem::initials).collect();
        assert_eq!(initials, vec!["JD", "JS", "BJ"]);
        assert_eq!(feed.entries[2].detail, "Bob Johnson - Blood Test Results");
    }

    #[test]
    fn test_initials_edge_cases() {
        let item = |subject: &str| ActivityItem::new("t", subject, "d", "w", Tone::Blue);
        assert_eq!(item("mary ann lee").initials(), "MA");
        assert_eq!(item("Cher").initials(), "C");
        assert_eq!(item("   ").initials(), "");
    }

    #[tokio::test]
    async fn test_record_new_patient_prepends() {
        let mut draft = PatientDraft::default();
        draft.set(PatientField::FirstName, "Ada");
        draft.set(PatientField::LastName, "Lovelace");
        draft.set(PatientField::Dob, "1815-12-10");
        draft.set(PatientField::Gender, "female");
        draft.set(PatientField::Phone, "555-0100");

        let record = InMemoryPatients::new().save(draft).await.unwrap();
        let mut feed = ActivityFeed::default();
        feed.record_new_patient(&record);

        assert_eq!(feed.entries.len(), 4);
        assert_eq!(feed.entries[0].subject, "Ada Lovelace");
        assert_eq!(feed.entries[0].when, "just now");
        assert_eq!(feed.entries[0].initials(), "AL");
    }
}
