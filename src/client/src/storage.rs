//! Persistent string storage for cross-reload hints.

use crate::errors::ClientError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// A small string key-value store, one per origin.
pub trait CountStorage: Send + Sync {
    /// Returns the stored value for `key`.
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
}

/// Storage backed by a JSON file.
#[derive(Debug)]
pub struct FileStorage {
    /// The file holding the key-value map
    path: PathBuf,
    /// Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl FileStorage {
    /// Creates a storage over the file at `path`. The file is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, ClientError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }
}

impl CountStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;

        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        debug!("Stored {}={} in {}", key, value, self.path.display());
        Ok(())
    }
}

/// Storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage holding one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl CountStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
