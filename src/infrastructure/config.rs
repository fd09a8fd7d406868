//! Configuration management

use crate::error::{Result, StaffbookError};
use crate::infrastructure::Latency;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-workspace metadata directory
pub const STAFFBOOK_DIR: &str = ".staffbook";
const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_ORGANIZATION: &str = "St. Luke's Hospital";
pub const DEFAULT_CURRENCY: &str = "RWF";
pub const DEFAULT_STORAGE_KEY: &str = "staff";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_organization")]
    pub organization: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub latency: Latency,
}

fn default_organization() -> String {
    DEFAULT_ORGANIZATION.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            organization: default_organization(),
            currency: default_currency(),
            storage_key: default_storage_key(),
            latency: Latency::NONE,
        }
    }
}

impl Config {
    /// Load config from .staffbook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STAFFBOOK_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StaffbookError::NotStaffbookDirectory(path.to_path_buf())
            } else {
                StaffbookError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .staffbook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let staffbook_dir = path.join(STAFFBOOK_DIR);
        let config_path = staffbook_dir.join(CONFIG_FILE);

        if !staffbook_dir.exists() {
            fs::create_dir(&staffbook_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::latency::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.currency, "RWF");
        assert_eq!(config.storage_key, "staff");
        assert_eq!(config.latency, Latency::NONE);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config {
            organization: "Kigali Clinic".to_string(),
            ..Config::default()
        };
        config.latency.set_millis(Operation::Update, 40);

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".staffbook/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            StaffbookError::NotStaffbookDirectory(_) => {}
            other => panic!("Expected NotStaffbookDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(STAFFBOOK_DIR)).unwrap();
        fs::write(
            temp.path().join(".staffbook/config.toml"),
            "currency = \"USD\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.currency, "USD");
        assert_eq!(loaded.organization, DEFAULT_ORGANIZATION);
        assert_eq!(loaded.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(loaded.latency, Latency::NONE);
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(STAFFBOOK_DIR)).unwrap();
        fs::write(temp.path().join(".staffbook/config.toml"), "currency = [").unwrap();

        let err = Config::load_from_dir(temp.path()).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
        match err {
            StaffbookError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }
}
