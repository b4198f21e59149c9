//! Platform-specific storage and timers.
//!
//! Picks the [`store::KeyValueStore`] the session lives in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **WASM without `web`**: [`store::MemoryStore`] (nothing persists)
//! - **Native**: filesystem via [`store::FileStore`] under the platform data dir

use std::time::Duration;

use api::{AuthService, MockAuthBackend};
use store::config::SessionConfig;
use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// The session service every platform runs with: platform storage, mocked login.
pub type PlatformAuth = AuthService<PlatformStore, MockAuthBackend>;

/// Create the platform-appropriate key-value store.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::new(store::FileStore::default_base())
    }
}

/// Create the session service over platform storage.
pub fn make_auth_service(config: &SessionConfig) -> PlatformAuth {
    AuthService::new(
        SessionStore::from_config(make_store(), config),
        MockAuthBackend::new(),
    )
}

/// Sleep without blocking the UI thread.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
