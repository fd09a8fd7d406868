//! Key-value slot storage backing the staff store

use crate::error::{Result, StaffbookError};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A named-slot blob store. Each slot holds one serialized document.
pub trait KeyValueStorage {
    /// Read the blob under `key`, `None` if the slot was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Slots stored as `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    dir: PathBuf,
}

impl FileSystemStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileSystemStorage { dir }
    }

    /// Resolve a slot key to its file; keys must be plain file stems
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
        if !valid {
            return Err(StaffbookError::Config(format!(
                "Invalid storage key: '{}'. Use letters, digits, '-', '_' or '.'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileSystemStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StaffbookError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    /// The temp file is removed again if the write does not complete.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self.dir.join(format!(
            "{}.json.tmp-{}",
            key,
            uuid::Uuid::new_v4().simple()
        ));

        let result = fs::write(&tmp_path, value).and_then(|()| {
            if cfg!(windows) && path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        });

        if let Err(e) = result {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %tmp_path.display(),
                        error = %cleanup,
                        "failed to remove temp file"
                    );
                }
            }
            return Err(StaffbookError::Io(e));
        }
        Ok(())
    }
}

/// Process-local storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
