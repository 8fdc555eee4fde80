//! # eightd-config
//!
//! Layered configuration loading for eightd using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EIGHTD_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.eightd/config.toml`
//! 4. User-level `~/.config/eightd/config.toml`
//! 5. Built-in defaults (the shop-floor Taiga instance and the X3570 line)
//!
//! # Environment Variable Mapping
//!
//! `EIGHTD_TAIGA__PASSWORD` -> `taiga.password`,
//! `EIGHTD_PROBLEM__ERROR_DESC` -> `problem.error_desc`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use eightd_config::EightdConfig;
//!
//! let config = EightdConfig::load_with_dotenv(None).expect("config");
//! println!("Taiga API: {}", config.taiga.api_root());
//! ```

mod error;
mod problem;
mod taiga;

pub use error::ConfigError;
pub use problem::ProblemConfig;
pub use taiga::TaigaConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EightdConfig {
    #[serde(default)]
    pub taiga: TaigaConfig,
    #[serde(default)]
    pub problem: ProblemConfig,
}

impl EightdConfig {
    /// Load configuration from defaults, TOML files and environment variables,
    /// then validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `explicit` is not a file, a source fails to
    /// parse, or a value is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.filter(|p| !p.is_file()) {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if present), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or stack providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".eightd/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Exact path only: `Toml::file` would also search parent directories.
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("EIGHTD_").split("__"))
    }

    /// Check cross-field constraints not expressible through serde.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.taiga.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("eightd").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EightdConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.taiga.project_id, 63);
        assert_eq!(config.problem.quantity, 15);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: EightdConfig = EightdConfig::figment(None).extract()?;
            assert_eq!(config.taiga.username, "shopfloor");
            assert_eq!(config.problem.project_name, "X3570");
            Ok(())
        });
    }
}
