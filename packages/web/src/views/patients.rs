use api::PatientRepository;
use dioxus::prelude::*;
use store::{DashboardConfig, PatientDraft};
use ui::components::{Button, ButtonVariant};
use ui::{use_activity_feed, use_patients, PatientList, PatientModal};

#[component]
pub fn Patients() -> Element {
    let config = use_context::<DashboardConfig>();
    let repo = use_patients();
    let mut feed = use_activity_feed();
    let mut show_modal = use_signal(|| false);
    // Bumped after each save so the list reloads
    let mut revision = use_signal(|| 0u32);

    let list_repo = repo.clone();
    let records = use_resource(move || {
        let repo = list_repo.clone();
        let _ = revision();
        async move { repo.list().await }
    });

    let on_save = move |draft: PatientDraft| {
        let repo = repo.clone();
        spawn(async move {
            match repo.save(draft).await {
                Ok(record) => {
                    feed.write().record_new_patient(&record);
                    revision += 1;
                }
                Err(e) => tracing::error!("Failed to save patient: {}", e),
            }
        });
    };

    rsx! {
        section {
            class: "patients-page",
            div {
                class: "page-header",
                h2 { "Patients" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| show_modal.set(true),
                    "Add Patient"
                }
            }

            match records() {
                Some(records) => rsx! {
                    PatientList {
                        records,
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_modal.set(true),
                            "Add Patient"
                        }
                    }
                },
                None => rsx! {
                    div { class: "guard-pending", span { class: "spinner" } }
                },
            }
        }

        if show_modal() {
            PatientModal {
                submit_delay_ms: config.patients.submit_delay_ms,
                on_save,
                on_close: move |_| show_modal.set(false),
            }
        }
    }
}
