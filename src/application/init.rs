//! Initialize workspace use case

use crate::application::{SeedOutcome, StaffStore};
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStorage, Workspace, WorkspaceRepository};
use std::fs;
use std::path::Path;

/// Create `.staffbook/` at `path`, write `config`, and seed the store.
pub fn init(path: &Path, config: &Config) -> Result<SeedOutcome> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;
    workspace.save_config(config)?;

    let store = StaffStore::from_config(workspace.storage(), config);
    let outcome = store.initialize()?;

    tracing::info!(root = %path.display(), ?outcome, "workspace initialized");
    Ok(outcome)
}

/// Open the store of an existing workspace using its config
pub fn open_store(workspace: &Workspace) -> Result<(Config, StaffStore<FileSystemStorage>)> {
    let config = workspace.load_config()?;
    let store = StaffStore::from_config(workspace.storage(), &config);
    Ok((config, store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StaffFilter;
    use tempfile::TempDir;

    #[test]
    fn test_init_seeds_store() {
        let temp = TempDir::new().unwrap();
        let outcome = init(temp.path(), &Config::default()).unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded);

        let workspace = Workspace::new(temp.path().to_path_buf());
        let (config, store) = open_store(&workspace).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(store.list(&StaffFilter::new()).unwrap().len(), 8);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("hr").join("roster");
        init(&nested, &Config::default()).unwrap();
        assert!(nested.join(".staffbook/data/staff.json").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &Config::default()).unwrap();
        assert!(init(temp.path(), &Config::default()).is_err());
    }
}
