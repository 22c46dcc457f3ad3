//! # bf-config
//!
//! Layered configuration loading for BugFlow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BUGFLOW_*` prefix, `__` as separator)
//! 2. Project-level `.bugflow/config.toml`
//! 3. User-level `~/.config/bugflow/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BUGFLOW_DATABASE__PATH` -> `database.path`,
//! `BUGFLOW_SEED__ON_STARTUP` -> `seed.on_startup`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bf_config::BugFlowConfig;
//!
//! let config = BugFlowConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.database.resolved_path().display());
//! ```

mod database;
mod error;
mod seed;

pub use database::{DEFAULT_DB_FILE, DatabaseConfig};
pub use error::ConfigError;
pub use seed::SeedConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BugFlowConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl BugFlowConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".bugflow/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("BUGFLOW_").split("__"))
    }

    /// Reject values that cannot work regardless of the store's state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `database.path` names an existing
    /// directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.database.path.is_empty() && PathBuf::from(&self.database.path).is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: format!("'{}' is a directory", self.database.path),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bugflow").join("config.toml"))
    }
}
