//! Backend selection and connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default local database path, relative to the working directory.
pub const DEFAULT_LOCAL_PATH: &str = ".readystock/readystock.db";

const fn default_timeout_secs() -> u64 {
    10
}

fn default_local_path() -> String {
    DEFAULT_LOCAL_PATH.to_string()
}

/// Which `StockBackend` the CLI talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Embedded libSQL file.
    #[default]
    Local,
    /// Hosted PostgREST-style service.
    Remote,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    /// Project URL of the hosted service (e.g., `https://abc.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public (anon) API key sent as `apikey`.
    #[serde(default)]
    pub anon_key: String,

    /// libSQL database path for the local backend, or `:memory:`.
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Per-request timeout for the remote backend, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            url: String::new(),
            anon_key: String::new(),
            local_path: default_local_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if the remote backend has the minimum required fields.
    pub fn is_remote_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Validate the selected backend's settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the remote backend lacks a
    /// URL or key, and `ConfigError::InvalidValue` for a malformed URL or an
    /// empty local path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            BackendKind::Remote => {
                if !self.is_remote_configured() {
                    return Err(ConfigError::NotConfigured {
                        section: "backend".into(),
                    });
                }
                if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
                    return Err(ConfigError::InvalidValue {
                        field: "backend.url".into(),
                        reason: format!("expected an http(s) URL, got '{}'", self.url),
                    });
                }
                Ok(())
            }
            BackendKind::Local => {
                if self.local_path.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "backend.local_path".into(),
                        reason: "must not be empty".into(),
                    });
                }
                Ok(())
            }
        }
    }
}
