use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use store::{PatientDraft, PatientField};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::patient_form::{PatientForm, SubmitBlocked};
use crate::platform::sleep;
use crate::views::ModalOverlay;

const GENDERS: [(&str, &str); 3] = [("male", "Male"), ("female", "Female"), ("other", "Other")];
const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Dialog for registering a new patient.
///
/// Only rendered while open; the parent owns that flag and drops the modal on
/// `on_close`. A valid submit waits `submit_delay_ms`, then hands the draft to
/// `on_save` and closes. Closing mid-submit cancels the save.
#[component]
pub fn PatientModal(
    on_save: EventHandler<PatientDraft>,
    on_close: EventHandler<()>,
    #[props(default = 1000)] submit_delay_ms: u64,
) -> Element {
    let mut state = use_signal(PatientForm::new);
    let mut pending = use_signal(|| None::<Task>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let ticket = match state.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(SubmitBlocked::Invalid(errors)) => {
                tracing::debug!("Patient form has {} invalid field(s)", errors.len());
                return;
            }
            Err(SubmitBlocked::InFlight) => return,
        };

        let task = spawn(async move {
            sleep(Duration::from_millis(submit_delay_ms)).await;
            pending.set(None);
            let accepted = state.write().complete(ticket);
            if let Some(draft) = accepted {
                on_save.call(draft);
                on_close.call(());
            }
        });
        pending.set(Some(task));
    };

    let mut close = move || {
        if let Some(task) = pending.write().take() {
            tracing::debug!("Cancelling in-flight patient save");
            task.cancel();
        }
        state.write().close();
        on_close.call(());
    };

    let snapshot = state();
    let submitting = snapshot.is_submitting();

    rsx! {
        ModalOverlay {
            title: "Add New Patient",
            on_close: move |_| close(),
            form {
                class: "patient-form",
                novalidate: true,
                onsubmit: handle_submit,

                div {
                    class: "form-grid",
                    TextField { form: state, field: PatientField::FirstName }
                    TextField { form: state, field: PatientField::LastName }
                    TextField { form: state, field: PatientField::Dob, r#type: "date" }

                    FieldShell {
                        field: PatientField::Gender,
                        error: snapshot.error(PatientField::Gender).map(str::to_string),
                        select {
                            id: "patient-gender",
                            class: "input",
                            disabled: submitting,
                            value: snapshot.value(PatientField::Gender),
                            onchange: move |evt| state.write().set(PatientField::Gender, evt.value()),
                            option { value: "", "Select gender" }
                            for (value, label) in GENDERS {
                                option { key: "{value}", value, "{label}" }
                            }
                        }
                    }

                    TextField {
                        form: state,
                        field: PatientField::Email,
                        r#type: "email",
                        placeholder: "name@example.com",
                    }
                    TextField { form: state, field: PatientField::Phone, r#type: "tel" }
                    TextField { form: state, field: PatientField::Address }

                    FieldShell {
                        field: PatientField::BloodType,
                        error: None,
                        select {
                            id: "patient-bloodType",
                            class: "input",
                            disabled: submitting,
                            value: snapshot.value(PatientField::BloodType),
                            onchange: move |evt| state.write().set(PatientField::BloodType, evt.value()),
                            option { value: "", "Unknown" }
                            for blood in BLOOD_TYPES {
                                option { key: "{blood}", value: blood, "{blood}" }
                            }
                        }
                    }

                    TextField { form: state, field: PatientField::EmergencyContact }
                }

                FieldShell {
                    field: PatientField::Notes,
                    error: None,
                    textarea {
                        id: "patient-notes",
                        class: "input",
                        rows: 3,
                        disabled: submitting,
                        value: snapshot.value(PatientField::Notes),
                        oninput: move |evt| state.write().set(PatientField::Notes, evt.value()),
                    }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| close(),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            span { class: "spinner spinner-sm" }
                            "Saving..."
                        } else {
                            "Save Patient"
                        }
                    }
                }
            }
        }
    }
}

/// Label, control and inline error for one form field.
#[component]
fn FieldShell(field: PatientField, error: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label {
                html_for: "patient-{field.name()}",
                "{field.label()}"
                if field.is_required() {
                    span { class: "required", " *" }
                }
            }
            {children}
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[component]
fn TextField(
    form: Signal<PatientForm>,
    field: PatientField,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] placeholder: String,
) -> Element {
    let mut form = form;
    let snapshot = form();
    let error = snapshot.error(field).map(str::to_string);

    rsx! {
        FieldShell {
            field,
            error: error.clone(),
            Input {
                id: "patient-{field.name()}",
                name: field.name(),
                r#type: r#type,
                placeholder: placeholder,
                value: snapshot.value(field).to_string(),
                disabled: snapshot.is_submitting(),
                invalid: error.is_some(),
                oninput: move |evt: FormEvent| form.write().set(field, evt.value()),
            }
        }
    }
}
