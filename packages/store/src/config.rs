//! # Application configuration: `dashboard.toml`
//!
//! Defines the TOML configuration the web app embeds at build time
//! (filename: [`DashboardConfig::filename`] = `"dashboard.toml"`). It captures
//! the behaviours that have changed between releases of the dashboard and so
//! must be chosen explicitly instead of hardcoded.
//!
//! ## Structure
//!
//! ```toml
//! [routing]
//! fallback = "dashboard"   # where `/` and unknown paths land: "dashboard" or "login"
//!
//! [patients]
//! submit_delay_ms = 1000   # simulated save latency of the patient form
//!
//! [session]
//! storage_key = "session"  # key of the persisted session record
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and builder helpers. |
//! | [`RoutingConfig`] | `fallback` target for `/` and unmatched paths ([`RouteFallback`]). |
//! | [`PatientsConfig`] | `submit_delay_ms`, default **1000**. |
//! | [`SessionConfig`] | `storage_key`, default **`"session"`**. |
//!
//! All structs derive or implement `Default` so that a missing or empty config
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure parsing or rendering `dashboard.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to render dashboard.toml: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub patients: PatientsConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the root path and unmatched paths redirect to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteFallback {
    #[default]
    Dashboard,
    Login,
}

/// Routing configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub fallback: RouteFallback,
}

/// Patient form configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientsConfig {
    /// Simulated latency of a patient save, in milliseconds. 0 saves immediately.
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

fn default_submit_delay() -> u64 {
    1000
}

impl Default for PatientsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
        }
    }
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key of the combined session record.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl DashboardConfig {
    /// Builder method to set the fallback route.
    pub fn with_fallback(mut self, fallback: RouteFallback) -> Self {
        self.routing.fallback = fallback;
        self
    }

    /// Builder method to set the simulated save latency.
    pub fn with_submit_delay(mut self, millis: u64) -> Self {
        self.patients.submit_delay_ms = millis;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("{}; using default configuration", e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.routing.fallback, RouteFallback::Dashboard);
        assert_eq!(config.patients.submit_delay_ms, 1000);
        assert_eq!(config.session.storage_key, "session");
    }

    #[test]
    fn test_login_fallback() {
        let config = DashboardConfig::from_toml(
            r#"
            [routing]
            fallback = "login"
            "#,
        )
        .unwrap();
        assert_eq!(config.routing.fallback, RouteFallback::Login);
        assert_eq!(config.patients.submit_delay_ms, 1000);
    }

    #[test]
    fn test_unknown_fallback_is_rejected() {
        let err = DashboardConfig::from_toml(
            r#"
            [routing]
            fallback = "patients"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_falls_back_to_default() {
        let config = DashboardConfig::from_toml_or_default("[patients\nsubmit_delay_ms = ");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DashboardConfig::default()
            .with_fallback(RouteFallback::Login)
            .with_submit_delay(0);
        let rendered = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&rendered).unwrap(), config);
    }
}
