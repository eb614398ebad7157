//! Configuration management for LedgerDesk.
//!
//! This module handles locating, loading, validating and saving the user's
//! `config.toml`.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use settings::{Settings, MAX_PAGE_SIZE};

use crate::data::Dataset;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "LEDGERDESK_CONFIG_DIR";

/// Name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while handling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration directory could not be created.
    #[error("failed to create configuration directory: {0}")]
    CreateDirError(std::io::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(std::io::Error),

    /// The configuration file could not be written.
    #[error("failed to write configuration file: {0}")]
    WriteError(std::io::Error),

    /// The configuration file is not valid TOML.
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A setting has an invalid value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The LedgerDesk configuration directory.
///
/// Uses `LEDGERDESK_CONFIG_DIR` when set, otherwise the platform config
/// directory with `ledgerdesk` appended.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join("ledgerdesk"))
        .ok_or(ConfigError::NoConfigDir)
}

/// The full application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }

    /// Load the configuration from the default location.
    ///
    /// Returns the defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save the configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;
        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Check that every setting is in range.
    pub fn validate(&self) -> Result<()> {
        let settings = &self.settings;

        if settings.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page_size must be at least 1".to_string(),
            ));
        }

        if settings.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "page_size {} exceeds the maximum of {}",
                settings.page_size, MAX_PAGE_SIZE
            )));
        }

        if settings.default_dataset.parse::<Dataset>().is_err() {
            return Err(ConfigError::ValidationError(format!(
                "unknown default_dataset '{}'",
                settings.default_dataset
            )));
        }

        if settings.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub").join(CONFIG_FILE);
        let mut config = Config::default();
        config.settings.page_size = 25;
        config.settings.default_dataset = "payments".to_string();
        config.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[settings]"));
        assert!(content.contains("page_size = 25"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[settings\npage_size = ").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = Config::default();
        config.settings.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size must be at least 1"));
    }

    #[test]
    fn test_huge_page_size_rejected() {
        let mut config = Config::default();
        config.settings.page_size = MAX_PAGE_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_dataset_rejected() {
        let mut config = Config::default();
        config.settings.default_dataset = "invoices".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invoices"));
    }

    #[test]
    fn test_invalid_file_rejected_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[settings]\npage_size = 0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    #[serial]
    fn test_config_dir_env_override() {
        let dir = tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());
        let resolved = config_dir().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);
        assert_eq!(resolved, dir.path());
    }

    #[test]
    #[serial]
    fn test_load_and_save_use_config_dir() {
        let dir = tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let mut config = Config::default();
        config.settings.searchable = false;
        config.save().unwrap();
        let loaded = Config::load().unwrap();

        std::env::remove_var(CONFIG_DIR_ENV);
        assert!(!loaded.settings.searchable);
        assert!(dir.path().join(CONFIG_FILE).exists());
    }
}
