pub mod config;
pub mod models;
pub mod session;

mod kv;
pub use kv::{KeyValueStore, StorageError};

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ConfigError, DashboardConfig, RouteFallback};
pub use models::{PatientDraft, PatientField, Role, User};
pub use session::{Session, SessionStore};
