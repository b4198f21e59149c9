//! # Browser `localStorage` store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. Values
//! go straight into `window.localStorage`, so a session survives page reloads
//! and browser restarts until it is explicitly cleared.
//!
//! The struct is zero-size: every call looks the storage object up again. This
//! keeps it `Clone` and `'static`, and the lookup is a cheap property read.
//!
//! Reads swallow errors (private-mode browsers can throw on access) and report
//! the key as absent. Writes surface [`StorageError::Unavailable`] or
//! [`StorageError::Rejected`] (e.g. quota exceeded).

use crate::kv::{KeyValueStore, StorageError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read `{}` from localStorage: {:?}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
