//! Authentication backend and session service.

mod backend;
mod service;

pub use backend::{AuthBackend, AuthResponse, Credentials, MockAuthBackend, MOCK_TOKEN};
pub use service::AuthService;
