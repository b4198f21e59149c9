//! Route guard for views that need a signed-in user.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};

/// What a guarded route should do for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: show a placeholder, decide nothing yet.
    Pending,
    /// Loaded and nobody is signed in: send the user to the login view.
    Redirect,
    /// Signed in: show the protected view.
    Render,
}

impl GuardDecision {
    pub fn evaluate(state: &AuthState) -> Self {
        if state.loading {
            GuardDecision::Pending
        } else if state.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect
        }
    }
}

/// Route guard component that requires authentication.
///
/// Re-evaluated on every auth change, so signing out while a protected view is
/// on screen redirects at once.
///
/// ```text
/// RequireAuth {
///     on_unauthenticated: move |_| { nav.replace(Route::Login {}); },
///     Outlet::<Route> {}
/// }
/// ```
#[component]
pub fn RequireAuth(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();
    let state = auth.signal();

    use_effect(move || {
        if GuardDecision::evaluate(&state.read()) == GuardDecision::Redirect {
            on_unauthenticated.call(());
        }
    });

    match GuardDecision::evaluate(&auth.state()) {
        GuardDecision::Pending => rsx! {
            div {
                class: "guard-pending",
                span { class: "spinner" }
            }
        },
        // The effect above performs the redirect
        GuardDecision::Redirect => rsx! {},
        GuardDecision::Render => rsx! { {children} },
    }
}
