//! Workspace discovery and layout

use crate::error::{Result, StaffbookError};
use crate::infrastructure::config::STAFFBOOK_DIR;
use crate::infrastructure::{Config, FileSystemStorage};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "STAFFBOOK_ROOT";

/// Abstract access to a workspace's metadata
pub trait WorkspaceRepository {
    /// Load configuration from .staffbook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .staffbook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .staffbook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .staffbook directory structure
    fn initialize(&self) -> Result<()>;
}

/// A directory holding a `.staffbook/` folder
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace: STAFFBOOK_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_staffbook_dir(&path) {
                tracing::debug!(root = %path.display(), "workspace from {}", ROOT_ENV);
                return Ok(Workspace::new(path));
            }
            return Err(StaffbookError::Config(format!(
                "{} is set to '{}' but no .staffbook directory found. \
                Run 'staffbook init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.staffbook` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_staffbook_dir(&current) {
                tracing::debug!(root = %current.display(), "workspace discovered");
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(StaffbookError::NotStaffbookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_staffbook_dir(path: &Path) -> bool {
        path.join(STAFFBOOK_DIR).is_dir()
    }

    /// Directory holding the storage slots
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(STAFFBOOK_DIR).join(DATA_DIR)
    }

    /// Slot storage rooted in this workspace
    pub fn storage(&self) -> FileSystemStorage {
        FileSystemStorage::new(self.data_dir())
    }
}

impl WorkspaceRepository for Workspace {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_staffbook_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(StaffbookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}
