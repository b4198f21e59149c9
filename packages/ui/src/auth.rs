//! Authentication context and hooks for the UI.

use api::{ApiError, AuthResponse, Credentials};
use dioxus::prelude::*;
use store::config::SessionConfig;
use store::User;

use crate::platform::{make_auth_service, PlatformAuth};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// State after the start-up session read finished.
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self::resolved(Some(user))
    }

    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Handle to the signed-in state and the session service behind it.
///
/// Obtained with [`use_auth`]; cheap to clone.
#[derive(Clone)]
pub struct AuthContext {
    state: Signal<AuthState>,
    service: PlatformAuth,
}

impl AuthContext {
    /// Current state. Subscribes the calling scope to changes.
    pub fn state(&self) -> AuthState {
        (self.state)()
    }

    /// The underlying signal, for effects that must re-run on auth changes.
    pub fn signal(&self) -> Signal<AuthState> {
        self.state
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Authenticate, persist the session, then publish the new user.
    pub async fn login(&self, credentials: Credentials) -> Result<AuthResponse, ApiError> {
        let response = self.service.login(credentials).await?;
        let mut state = self.state;
        state.set(AuthState::signed_in(response.user.clone()));
        Ok(response)
    }

    /// Drop the in-memory user first so guarded views close immediately,
    /// then clear storage.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let mut state = self.state;
        state.set(AuthState::signed_out());
        self.service.logout().await
    }
}

/// Get the authentication context.
///
/// # Panics
///
/// Panics when called outside an [`AuthProvider`]; that is a wiring bug, not a
/// runtime condition.
pub fn use_auth() -> AuthContext {
    match try_use_context::<AuthContext>() {
        Some(auth) => auth,
        None => panic!("use_auth must be used within an AuthProvider"),
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(#[props(default)] session: SessionConfig, children: Element) -> Element {
    let state = use_signal(AuthState::default);
    let auth = use_context_provider(|| AuthContext {
        state,
        service: make_auth_service(&session),
    });

    // Restore the persisted session on mount
    let init = auth.clone();
    let _ = use_resource(move || {
        let auth = init.clone();
        async move {
            let user = auth.service.initialize().await;
            let mut state = auth.state;
            state.set(AuthState::resolved(user));
        }
    });

    let service = auth.service.clone();
    use_drop(move || service.teardown());

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string(), into)] label: String,
    #[props(default, into)] class: String,
    on_logged_out: Option<EventHandler<()>>,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        let auth = auth.clone();
        async move {
            if let Err(e) = auth.logout().await {
                tracing::error!("Failed to clear session: {}", e);
            }
            if let Some(handler) = on_logged_out {
                handler.call(());
            }
        }
    };

    rsx! {
        button {
            class: "btn btn-danger {class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn user() -> User {
        User {
            id: 1,
            name: "Test User".to_string(),
            email: "doc@example.com".to_string(),
            role: Role::Doctor,
        }
    }

    #[test]
    fn test_default_is_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_transitions() {
        let restored = AuthState::resolved(Some(user()));
        assert!(!restored.loading);
        assert!(restored.is_authenticated());

        assert_eq!(AuthState::signed_in(user()), restored);

        let out = AuthState::signed_out();
        assert!(!out.loading);
        assert!(out.user.is_none());
    }
}
