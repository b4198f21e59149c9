//! # Session service
//!
//! [`AuthService`] is the one object that knows how a login becomes a persisted
//! session and how a logout removes it. It is built explicitly from a
//! [`SessionStore`] and an [`AuthBackend`] and handed to whoever needs it; there
//! is no process-wide instance.
//!
//! ## Lifecycle
//!
//! | Step | Effect |
//! |------|--------|
//! | [`initialize`](AuthService::initialize) | Load the persisted session once at start-up; yields the user if a complete session exists. |
//! | [`login`](AuthService::login) | Authenticate through the backend, persist user + token as one record, return both. |
//! | [`logout`](AuthService::logout) | Remove the persisted session. No backend call. |
//! | [`teardown`](AuthService::teardown) | Consume the service when its owner goes away. |
//!
//! In-memory "who is signed in" state is the caller's business (the UI keeps it
//! in a signal); the service only guarantees storage follows each call.

use store::{KeyValueStore, SessionStore, User};

use super::backend::{AuthBackend, AuthResponse, Credentials};
use crate::ApiError;

#[derive(Clone, Debug)]
pub struct AuthService<S, B> {
    sessions: SessionStore<S>,
    backend: B,
}

impl<S: KeyValueStore, B: AuthBackend> AuthService<S, B> {
    pub fn new(sessions: SessionStore<S>, backend: B) -> Self {
        Self { sessions, backend }
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Read the persisted session. Returns the user only if both user and
    /// token were found.
    pub async fn initialize(&self) -> Option<User> {
        let session = self.sessions.load().await;
        if !session.is_authenticated() {
            tracing::debug!("No persisted session");
            return None;
        }
        let user = session.user?;
        tracing::debug!("Restored session for {}", user.email);
        Some(user)
    }

    pub async fn login(&self, credentials: Credentials) -> Result<AuthResponse, ApiError> {
        let response = self.backend.authenticate(&credentials).await?;
        self.sessions.save(&response.user, &response.token).await?;
        tracing::info!("Signed in as {}", response.user.email);
        Ok(response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.sessions.clear().await?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn teardown(self) {
        tracing::debug!("Auth service torn down (session key `{}`)", self.sessions.key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::backend::{MockAuthBackend, MOCK_TOKEN};
    use store::{MemoryStore, Role, StorageError};

    fn service(backend: MemoryStore) -> AuthService<MemoryStore, MockAuthBackend> {
        AuthService::new(SessionStore::new(backend), MockAuthBackend::new())
    }

    #[tokio::test]
    async fn test_initialize_without_session() {
        let auth = service(MemoryStore::new());
        assert!(auth.initialize().await.is_none());
    }

    #[tokio::test]
    async fn test_login_returns_user_with_submitted_email() {
        let auth = service(MemoryStore::new());
        let response = auth
            .login(Credentials::new("Doc.Who@Example.org", None))
            .await
            .unwrap();

        assert_eq!(response.user.email, "Doc.Who@Example.org");
        assert_eq!(response.user.role, Role::Doctor);
        assert_eq!(response.token, MOCK_TOKEN);
    }

    #[tokio::test]
    async fn test_login_persists_and_logout_clears() {
        let backend = MemoryStore::new();
        let auth = service(backend.clone());

        auth.login(Credentials::new("doc@example.com", Some("pw".into())))
            .await
            .unwrap();

        let session = auth.sessions().load().await;
        assert!(session.user.is_some());
        assert_eq!(session.token.as_deref(), Some(MOCK_TOKEN));

        auth.logout().await.unwrap();
        assert!(backend.is_empty());
        assert!(!auth.sessions().load().await.is_authenticated());
    }

    #[tokio::test]
    async fn test_initialize_restores_previous_login() {
        let backend = MemoryStore::new();
        service(backend.clone())
            .login(Credentials::new("doc@example.com", None))
            .await
            .unwrap();

        // A fresh service over the same storage, as after a page reload
        let restored = service(backend).initialize().await.unwrap();
        assert_eq!(restored.email, "doc@example.com");
        assert_eq!(restored.name, "Test User");
    }

    #[tokio::test]
    async fn test_login_twice_replaces_user() {
        let auth = service(MemoryStore::new());
        auth.login(Credentials::new("first@example.com", None))
            .await
            .unwrap();
        auth.login(Credentials::new("second@example.com", None))
            .await
            .unwrap();

        let user = auth.initialize().await.unwrap();
        assert_eq!(user.email, "second@example.com");
    }

    /// Storage that accepts reads but refuses every write.
    #[derive(Clone, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Option<String> {
            None
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_error() {
        let auth = AuthService::new(SessionStore::new(ReadOnlyStore), MockAuthBackend::new());

        let err = auth
            .login(Credentials::new("doc@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Storage(StorageError::Unavailable)));

        assert!(matches!(
            auth.logout().await,
            Err(ApiError::Storage(StorageError::Unavailable))
        ));
    }
}
