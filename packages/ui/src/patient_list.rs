use api::{InMemoryPatients, PatientRecord};
use dioxus::prelude::*;

/// The page-lifetime patient repository provided by the app root.
pub fn use_patients() -> InMemoryPatients {
    use_context::<InMemoryPatients>()
}

/// Table of saved patients, or an empty-state message.
#[component]
pub fn PatientList(records: Vec<PatientRecord>, children: Element) -> Element {
    if records.is_empty() {
        return rsx! {
            div {
                class: "card empty-state",
                p { "No patients registered yet." }
                {children}
            }
        };
    }

    rsx! {
        table {
            class: "card patient-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Date of birth" }
                    th { "Gender" }
                    th { "Phone" }
                    th { "Added" }
                }
            }
            tbody {
                for record in records.iter() {
                    tr {
                        key: "{record.id}",
                        td { "{record.draft.full_name()}" }
                        td { "{record.draft.dob}" }
                        td { class: "capitalize", "{record.draft.gender}" }
                        td { "{record.draft.phone}" }
                        td { "{added(record)}" }
                    }
                }
            }
        }
    }
}

fn added(record: &PatientRecord) -> String {
    record.created_at.format("%Y-%m-%d %H:%M").to_string()
}
