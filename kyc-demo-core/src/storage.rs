//! Key-value storage for persisted demo state
//!
//! The verification state lives under a single key. [`FileStore`] keeps
//! one JSON file per key inside a storage directory, [`MemoryStore`] keeps
//! everything in process memory.
//!
//! # Security Warning
//!
//! This storage is **NOT suitable for production use**:
//! - No encryption at rest
//! - No atomicity guarantees
//! - No concurrent access protection
//!
//! # Examples
//!
//! ```no_run
//! use kyc_demo_core::{FileStore, KeyValueStore};
//!
//! # fn example() -> kyc_demo_core::KycResult<()> {
//! let storage = FileStore::new("./data");
//! storage.set("kycData", "{}")?;
//! assert_eq!(storage.get("kycData")?.as_deref(), Some("{}"));
//! storage.remove("kycData")?;
//! # Ok(())
//! # }
//! ```

use crate::error::{KycError, KycResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Durable string key-value storage
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> KycResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> KycResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> KycResult<()>;
}

/// Simple file-based storage, one `<key>.json` file per key
pub struct FileStore {
    storage_dir: PathBuf,
}

impl FileStore {
    /// Create a new storage instance
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
        }
    }

    /// Initialize storage directory
    pub fn init(&self) -> KycResult<()> {
        std::fs::create_dir_all(&self.storage_dir)?;
        Ok(())
    }

    /// Directory holding the stored files
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Path of the file backing `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.storage_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> KycResult<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> KycResult<()> {
        self.init()?;
        let path = self.entry_path(key);
        std::fs::write(&path, value)
            .map_err(|e| KycError::Storage(format!("failed to write {}: {}", path.display(), e)))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> KycResult<()> {
        let path = self.entry_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KycError::Storage(format!(
                "failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-memory storage for tests and throwaway sessions
///
/// Lock poisoning is reported as a storage error rather than a panic.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

fn lock_error(context: &str) -> KycError {
    KycError::Storage(format!("MemoryStore: lock poisoned during {}", context))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if storage is empty. Returns true if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> KycResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| lock_error("get"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KycResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("set"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> KycResult<()> {
        let mut entries = self.entries.write().map_err(|_| lock_error("remove"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileStore::new(temp_dir.path().join("nested"));

        assert_eq!(storage.get("kycData").unwrap(), None);

        storage.set("kycData", r#"{"pan":{}}"#).unwrap();
        assert!(storage.entry_path("kycData").exists());
        assert_eq!(
            storage.get("kycData").unwrap().as_deref(),
            Some(r#"{"pan":{}}"#)
        );

        storage.remove("kycData").unwrap();
        assert_eq!(storage.get("kycData").unwrap(), None);
    }

    #[test]
    fn test_file_store_remove_missing_key() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = FileStore::new(temp_dir.path());
        assert!(storage.remove("never-written").is_ok());
    }

    #[test]
    fn test_memory_store() {
        let storage = MemoryStore::new();
        assert!(storage.is_empty());

        storage.set("a", "1").unwrap();
        storage.set("a", "2").unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));

        storage.remove("a").unwrap();
        storage.remove("a").unwrap();
        assert!(storage.is_empty());
    }
}
