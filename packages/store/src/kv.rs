//! # Durable key-value storage
//!
//! [`KeyValueStore`] is the narrow seam every persistence backend implements:
//! string keys, string values, nothing else. The session layer
//! ([`crate::SessionStore`]) serialises its record to JSON before handing it
//! to a backend, so backends never need to understand the payload.
//!
//! | Backend | Platform | Where values live |
//! |---------|----------|-------------------|
//! | [`crate::MemoryStore`] | any | a shared `HashMap`, gone on drop |
//! | [`crate::FileStore`] | native | one file per key under a base directory |
//! | [`crate::LocalStorage`] | wasm32 + `web` | `window.localStorage` |
//!
//! Reads are infallible by contract: a backend that cannot be reached reports
//! the key as absent so the caller falls back to "logged out" instead of
//! crashing. Writes and removals surface a [`StorageError`].

use thiserror::Error;

/// Failure writing to or removing from a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend is not available")]
    Unavailable,
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage rejected key `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// Async trait for string-keyed durable storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<(), StorageError>>;
}
