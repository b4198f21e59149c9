//! Login page view with an email/password form.

use api::Credentials;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::use_auth;

use crate::Route;

/// Login page component.
///
/// Any non-empty email signs in; the password is collected but not checked.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the dashboard
    let state = auth.signal();
    use_effect(move || {
        let state = state.read();
        if !state.loading && state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            if e.is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }
            let p = password();
            let p = (!p.is_empty()).then_some(p);

            loading.set(true);
            match auth.login(Credentials::new(e, p)).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",

            form {
                class: "card login-card",
                novalidate: true,
                onsubmit: handle_login,

                h1 { "Healthcare Dashboard" }
                p { class: "muted", "Sign in to continue" }

                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "doctor@example.com",
                        value: email(),
                        disabled: loading(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        disabled: loading(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
