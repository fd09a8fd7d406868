//! Error types for staffbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for staffbook
#[derive(Debug, Error)]
pub enum StaffbookError {
    #[error("Not a staffbook directory: {0}")]
    NotStaffbookDirectory(PathBuf),

    #[error("Staff with ID {0} not found")]
    StaffNotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("Unknown department: '{0}'")]
    UnknownDepartment(String),

    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    #[error("Nothing to update: pass at least one field such as --status or --salary")]
    EmptyUpdate,

    #[error("Store slot '{0}' has not been initialized")]
    StoreNotInitialized(String),

    #[error("Store slot '{key}' contains malformed data: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not generate a unique staff ID after {0} attempts")]
    IdCollision(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StaffbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StaffbookError::NotStaffbookDirectory(_) => 2,
            StaffbookError::InvalidValue(_)
            | StaffbookError::InvalidDate(_)
            | StaffbookError::UnknownDepartment(_)
            | StaffbookError::UnknownRole(_)
            | StaffbookError::EmptyUpdate => 3,
            StaffbookError::StaffNotFound(_) => 4,
            StaffbookError::StoreNotInitialized(_) | StaffbookError::CorruptStore { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StaffbookError::NotStaffbookDirectory(path) => {
                format!(
                    "Not a staffbook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'staffbook init' in this directory to create a new roster\n\
                    • Navigate to an existing staffbook directory\n\
                    • Set STAFFBOOK_ROOT environment variable to your roster path",
                    path.display()
                )
            }
            StaffbookError::StaffNotFound(id) => {
                format!(
                    "No staff member with ID '{}'\n\n\
                    Suggestions:\n\
                    • Use 'staffbook list' to see current staff and their IDs\n\
                    • Use 'staffbook list --search <name>' to find someone by name",
                    id
                )
            }
            StaffbookError::UnknownDepartment(_) => {
                format!(
                    "{}\n\n\
                    Valid departments: Medical, Nursing, Laboratory, Pharmacy, \
                    Radiology, Administration, Maintenance, IT",
                    self
                )
            }
            StaffbookError::UnknownRole(_) => {
                format!(
                    "{}\n\n\
                    Valid roles: Doctor, Nurse, Lab Technician, Pharmacist, \
                    Radiologist, Administrator, Maintenance Staff, IT Support",
                    self
                )
            }
            StaffbookError::InvalidDate(_) => {
                format!(
                    "{}\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: staffbook list --from 2020-01-01 --to 2021-12-31",
                    self
                )
            }
            StaffbookError::InvalidValue(msg) => msg.clone(),
            StaffbookError::StoreNotInitialized(_) | StaffbookError::CorruptStore { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'staffbook reset' to restore the store from seed data\n\
                    • Check 'staffbook config storage_key' points at the right slot",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StaffbookError
pub type Result<T> = std::result::Result<T, StaffbookError>;
