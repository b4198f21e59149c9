//! # Session persistence
//!
//! [`SessionStore`] keeps the signed-in identity and its token in a
//! [`KeyValueStore`]. Both halves live in ONE JSON record under a single key
//! (default `"session"`):
//!
//! ```json
//! {"user":{"id":1,"name":"Test User","email":"a@b.c","role":"doctor"},"token":"fake-token-123"}
//! ```
//!
//! Writing one record means `user` and `token` are set and cleared together;
//! there is no window in which only one of them is persisted.
//!
//! ## Loading rules
//!
//! - No record → [`Session::empty`].
//! - Record that fails to parse (corrupted, truncated, or missing a half) →
//!   logged and treated as [`Session::empty`]. Loading never fails.
//! - No record, but the older two-entry layout (`"user"` + `"token"`) is present
//!   → both are adopted, rewritten as the combined record, and the old entries
//!   are removed. A lone `"user"` or `"token"` entry is ignored.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::kv::{KeyValueStore, StorageError};
use crate::models::User;

/// Key of the serialized user in the older two-entry layout.
pub const LEGACY_USER_KEY: &str = "user";
/// Key of the token in the older two-entry layout.
pub const LEGACY_TOKEN_KEY: &str = "token";

/// The persisted signed-in state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    /// The logged-out session.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
        }
    }

    /// True only when both a user and a token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// On-disk shape. Both halves are mandatory, so a record missing either one
/// fails to parse and loads as logged out.
#[derive(Serialize, Deserialize)]
struct SessionRecord {
    user: User,
    token: String,
}

impl From<SessionRecord> for Session {
    fn from(record: SessionRecord) -> Self {
        Session::new(record.user, record.token)
    }
}

/// Load/save/clear of the session record over any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Store the record under the default `"session"` key.
    pub fn new(backend: S) -> Self {
        Self::from_config(backend, &SessionConfig::default())
    }

    pub fn from_config(backend: S, config: &SessionConfig) -> Self {
        Self {
            backend,
            key: config.storage_key.clone(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted session. Never fails; anything unusable is logged out.
    pub async fn load(&self) -> Session {
        let Some(raw) = self.backend.get(&self.key).await else {
            return match self.adopt_legacy().await {
                Some(record) => record.into(),
                None => Session::empty(),
            };
        };

        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => record.into(),
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed session record `{}`: {}",
                    self.key,
                    e
                );
                Session::empty()
            }
        }
    }

    /// Persist `user` and `token` as one record.
    pub async fn save(&self, user: &User, token: &str) -> Result<(), StorageError> {
        let record = SessionRecord {
            user: user.clone(),
            token: token.to_string(),
        };
        let json = serde_json::to_string(&record)?;
        self.backend.set(&self.key, &json).await
    }

    /// Remove the session record and any leftover entries of the older layout.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(&self.key).await?;
        self.backend.remove(LEGACY_USER_KEY).await?;
        self.backend.remove(LEGACY_TOKEN_KEY).await?;
        Ok(())
    }

    /// Move a two-entry session into the combined record, if both entries exist.
    async fn adopt_legacy(&self) -> Option<SessionRecord> {
        let user = self.backend.get(LEGACY_USER_KEY).await;
        let token = self.backend.get(LEGACY_TOKEN_KEY).await;

        let (user, token) = match (user, token) {
            (Some(user), Some(token)) if !token.is_empty() => (user, token),
            (None, None) => return None,
            _ => {
                tracing::debug!("Ignoring incomplete legacy session entries");
                return None;
            }
        };

        let user: User = match serde_json::from_str(&user) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Ignoring malformed legacy user entry: {}", e);
                return None;
            }
        };

        if let Err(e) = self.save(&user, &token).await {
            tracing::warn!("Failed to migrate legacy session: {}", e);
            return Some(SessionRecord { user, token });
        }
        for key in [LEGACY_USER_KEY, LEGACY_TOKEN_KEY] {
            if let Err(e) = self.backend.remove(key).await {
                tracing::warn!("Failed to remove legacy entry `{}`: {}", key, e);
            }
        }
        tracing::debug!("Migrated legacy session for {}", user.email);

        Some(SessionRecord { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    fn doctor(email: &str) -> User {
        User {
            id: 1,
            name: "Test User".to_string(),
            email: email.to_string(),
            role: Role::Doctor,
        }
    }

    #[tokio::test]
    async fn test_empty_store_loads_logged_out() {
        let sessions = SessionStore::new(MemoryStore::new());
        let session = sessions.load().await;
        assert_eq!(session, Session::empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let sessions = SessionStore::new(MemoryStore::new());
        let user = doctor("doc@example.com");

        sessions.save(&user, "fake-token-123").await.unwrap();

        let session = sessions.load().await;
        assert_eq!(session.user, Some(user));
        assert_eq!(session.token.as_deref(), Some("fake-token-123"));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_record_holds_user_and_token_together() {
        let backend = MemoryStore::new();
        let sessions = SessionStore::new(backend.clone());

        sessions
            .save(&doctor("doc@example.com"), "fake-token-123")
            .await
            .unwrap();

        assert_eq!(backend.len(), 1);
        let raw = backend.get("session").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["user"]["email"], "doc@example.com");
        assert_eq!(value["token"], "fake-token-123");
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let backend = MemoryStore::new();
        let sessions = SessionStore::new(backend.clone());

        sessions
            .save(&doctor("doc@example.com"), "fake-token-123")
            .await
            .unwrap();
        sessions.clear().await.unwrap();

        assert!(backend.is_empty());
        assert_eq!(sessions.load().await, Session::empty());
    }

    #[tokio::test]
    async fn test_malformed_record_loads_logged_out() {
        let backend = MemoryStore::new();
        backend.set("session", "{not json").await.unwrap();

        let sessions = SessionStore::new(backend);
        assert_eq!(sessions.load().await, Session::empty());
    }

    #[tokio::test]
    async fn test_record_missing_token_loads_logged_out() {
        let backend = MemoryStore::new();
        backend
            .set(
                "session",
                r#"{"user":{"id":1,"name":"Test User","email":"a@b.c","role":"doctor"}}"#,
            )
            .await
            .unwrap();

        let sessions = SessionStore::new(backend);
        assert_eq!(sessions.load().await, Session::empty());
    }

    #[tokio::test]
    async fn test_custom_storage_key() {
        let backend = MemoryStore::new();
        let config = SessionConfig {
            storage_key: "dash-session".to_string(),
        };
        let sessions = SessionStore::from_config(backend.clone(), &config);

        sessions.save(&doctor("a@b.c"), "t").await.unwrap();
        assert!(backend.get("dash-session").await.is_some());
        assert!(backend.get("session").await.is_none());
    }

    #[tokio::test]
    async fn test_adopts_legacy_two_entry_session() {
        let backend = MemoryStore::new();
        backend
            .set(
                LEGACY_USER_KEY,
                r#"{"id":1,"name":"Test User","email":"old@example.com","role":"doctor"}"#,
            )
            .await
            .unwrap();
        backend
            .set(LEGACY_TOKEN_KEY, "fake-token-123")
            .await
            .unwrap();

        let sessions = SessionStore::new(backend.clone());
        let session = sessions.load().await;

        assert_eq!(session.user, Some(doctor("old@example.com")));
        assert_eq!(session.token.as_deref(), Some("fake-token-123"));

        // Old entries are gone, the combined record replaced them
        assert!(backend.get(LEGACY_USER_KEY).await.is_none());
        assert!(backend.get(LEGACY_TOKEN_KEY).await.is_none());
        assert!(backend.get("session").await.is_some());
    }

    #[tokio::test]
    async fn test_lone_legacy_entry_is_ignored() {
        let backend = MemoryStore::new();
        backend
            .set(LEGACY_TOKEN_KEY, "fake-token-123")
            .await
            .unwrap();

        let sessions = SessionStore::new(backend.clone());
        assert_eq!(sessions.load().await, Session::empty());
        // Left untouched for clear() to sweep
        assert!(backend.get(LEGACY_TOKEN_KEY).await.is_some());

        sessions.clear().await.unwrap();
        assert!(backend.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_legacy_user_is_ignored() {
        let backend = MemoryStore::new();
        backend.set(LEGACY_USER_KEY, "not json").await.unwrap();
        backend.set(LEGACY_TOKEN_KEY, "t").await.unwrap();

        let sessions = SessionStore::new(backend);
        assert_eq!(sessions.load().await, Session::empty());
    }
}
