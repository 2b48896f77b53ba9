//! # ready-config
//!
//! Layered configuration loading for ReadyStock using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`READYSTOCK_*` prefix, `__` as separator)
//! 2. Project-level `.readystock/config.toml`
//! 3. User-level `~/.config/readystock/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `READYSTOCK_BACKEND__URL` -> `backend.url`,
//! `READYSTOCK_SESSION__ACCESS_TOKEN` -> `session.access_token`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ready_config::ReadyConfig;
//!
//! let config = ReadyConfig::load_with_dotenv().expect("config");
//! if config.backend.is_remote_configured() {
//!     println!("Backend URL: {}", config.backend.url);
//! }
//! ```

mod backend;
mod error;
mod general;
mod session;

pub use backend::{BackendConfig, BackendKind, DEFAULT_LOCAL_PATH};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".readystock/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReadyConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ReadyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("READYSTOCK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("readystock").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ReadyConfig::default();
        assert_eq!(config.backend.kind, BackendKind::Local);
        assert!(!config.session.has_token());
        assert_eq!(config.general.page_size, 10);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ReadyConfig = ReadyConfig::figment().extract()?;
            assert_eq!(config.backend.local_path, DEFAULT_LOCAL_PATH);
            assert_eq!(config.general.recent_limit, 5);
            Ok(())
        });
    }
}
