//! Config management use case

use crate::error::{Result, StaffbookError};
use crate::infrastructure::{Config, Operation, Workspace, WorkspaceRepository};

const VALID_KEYS: &str = "organization, currency, storage_key, latency.list, latency.get, \
    latency.create, latency.update, latency.delete";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: Workspace,
}

impl ConfigService {
    pub fn new(repository: Workspace) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "organization" => Ok(config.organization),
            "currency" => Ok(config.currency),
            "storage_key" => Ok(config.storage_key),
            _ => match latency_operation(key) {
                Some(op) => Ok(config.latency.millis(op).to_string()),
                None => Err(unknown_key(key)),
            },
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "organization" => {
                config.organization = value.to_string();
            }
            "currency" => {
                let code = value.trim().to_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(StaffbookError::Config(format!(
                        "Invalid currency code: '{}'. Expected a 3-letter ISO code such as RWF",
                        value
                    )));
                }
                config.currency = code;
            }
            "storage_key" => {
                // Validates the key shape before it is persisted
                self.repository.storage().slot_path(value)?;
                config.storage_key = value.to_string();
            }
            _ => {
                let op = latency_operation(key).ok_or_else(|| unknown_key(key))?;
                let ms = value.parse::<u64>().map_err(|_| {
                    StaffbookError::Config(format!(
                        "Invalid latency for '{}': '{}'. Expected milliseconds as a whole number",
                        key, value
                    ))
                })?;
                config.latency.set_millis(op, ms);
            }
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn latency_operation(key: &str) -> Option<Operation> {
    key.strip_prefix("latency.").and_then(Operation::from_name)
}

fn unknown_key(key: &str) -> StaffbookError {
    StaffbookError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
