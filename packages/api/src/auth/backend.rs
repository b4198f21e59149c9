//! # Credential check seam
//!
//! [`AuthBackend`] turns submitted [`Credentials`] into an [`AuthResponse`]
//! (`user` + `token`). The dashboard ships with [`MockAuthBackend`], which
//! accepts every input:
//!
//! - `id` is always `1`, `name` is always `"Test User"`, `role` is
//!   [`Role::Doctor`];
//! - `email` is copied from the credentials verbatim;
//! - the token is the fixed [`MOCK_TOKEN`].
//!
//! A real identity provider plugs in by implementing the trait; nothing that
//! consumes an [`AuthResponse`] needs to change.

use serde::{Deserialize, Serialize};
use store::{Role, User};

use crate::ApiError;

/// Token issued by [`MockAuthBackend`].
pub const MOCK_TOKEN: &str = "fake-token-123";

/// Submitted login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: Option<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

/// Result of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// Async trait for verifying credentials.
pub trait AuthBackend {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>>;
}

/// Accepts any credentials and issues a fixed identity and token.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockAuthBackend;

impl MockAuthBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AuthBackend for MockAuthBackend {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let user = User {
            id: 1,
            name: "Test User".to_string(),
            email: credentials.email.clone(),
            role: Role::Doctor,
        };
        Ok(AuthResponse {
            user,
            token: MOCK_TOKEN.to_string(),
        })
    }
}
