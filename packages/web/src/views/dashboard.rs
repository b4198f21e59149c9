use api::PatientRepository;
use dioxus::prelude::*;
use store::{DashboardConfig, PatientDraft};
use ui::{
    use_activity_feed, use_patients, ActivityPanel, PatientModal, QuickAction, QuickActions,
    StatGrid, WelcomeCard,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<DashboardConfig>();
    let repo = use_patients();
    let mut feed = use_activity_feed();
    let mut show_modal = use_signal(|| false);
    let nav = use_navigator();

    let on_action = move |action: QuickAction| match action {
        QuickAction::AddPatient => show_modal.set(true),
        QuickAction::NewAppointment => {
            nav.push(Route::Appointment {});
        }
        QuickAction::UploadRecords | QuickAction::ViewReports => {
            nav.push(Route::Patients {});
        }
    };

    let on_save = move |draft: PatientDraft| {
        let repo = repo.clone();
        spawn(async move {
            match repo.save(draft).await {
                Ok(record) => feed.write().record_new_patient(&record),
                Err(e) => tracing::error!("Failed to save patient: {}", e),
            }
        });
    };

    rsx! {
        div {
            class: "dashboard",
            WelcomeCard {}
            StatGrid {}
            div {
                class: "dashboard-columns",
                ActivityPanel {}
                QuickActions { on_action }
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
