//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in
//! its own file. It is used on native targets so a signed-in session survives
//! an app restart, the same way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── session            # combined session record (JSON)
//! └── <other keys>       # one file per key, raw value
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::default_base`] resolves `<data_dir>/healthdash` via
//! [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/healthdash/` |
//! | Linux | `~/.local/share/healthdash/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\healthdash\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::kv::{KeyValueStore, StorageError};

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// `<data_dir>/healthdash`, or `./healthdash` when the platform has no data dir.
    pub fn default_base() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("healthdash")
    }

    fn key_path(&self, key: &str) -> Option<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && key != "."
            && key != "..";
        valid.then(|| self.base.join(key))
    }

    fn checked_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        self.key_path(key).ok_or_else(|| StorageError::Rejected {
            key: key.to_string(),
            reason: "keys may only contain ASCII letters, digits, `_`, `-` and `.`".to_string(),
        })
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        let path = self.key_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.checked_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        // Write-then-rename so a crash never leaves a half-written value behind.
        let tmp = self.base.join(format!(".{key}.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.checked_path(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
