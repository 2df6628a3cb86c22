//! Configuration module
//!
//! Settings live in a TOML file, by default
//! `~/.config/reservation-desk/config.toml`:
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//!
//! [[restaurants]]
//! name = "Zaitoon"
//! image = "zaitoon.png"
//! ```
//!
//! Every section is optional; missing values fall back to the defaults.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::{default_restaurants, Catalog, Restaurant};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "RESERVATION_DESK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Restaurant catalog is empty")]
    EmptyCatalog,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `warn` or `reservation_desk=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub restaurants: Vec<Restaurant>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            restaurants: default_restaurants(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        if config.restaurants.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(config)
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Like [`load`](Self::load), but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.restaurants.clone())
    }
}

/// `<config dir>/reservation-desk/config.toml`, or a relative path when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reservation-desk")
        .join("config.toml")
}
