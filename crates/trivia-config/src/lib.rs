//! # trivia-config
//!
//! Layered configuration loading for the trivia service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRIVIA_*` prefix, `__` as separator)
//! 2. Project-level `.trivia/config.toml`
//! 3. User-level `~/.config/trivia/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TRIVIA_DATABASE__PATH` -> `database.path` and
//! `TRIVIA_PAGINATION__PAGE_SIZE` -> `pagination.page_size`.
//!
//! # Usage
//!
//! ```no_run
//! use trivia_config::TriviaConfig;
//!
//! let config = TriviaConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod pagination;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use pagination::PaginationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".trivia/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TriviaConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl TriviaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TRIVIA_").split("__"))
    }

    /// Reject values that would make the service unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` for an empty database path and
    /// `ConfigError::InvalidValue` for a zero page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.database.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        if self.pagination.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trivia").join("config.toml"))
    }
}
