//! Durable key-value storage for session state.
//!
//! Every key lives in its own file so a damaged value never takes the
//! others down with it.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use directories::ProjectDirs;
use thiserror::Error;

use crate::util::config::AppConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "SneakerPriceCalculator";
const APP_NAME: &str = "SneakerPriceCalculator";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Minimal string key-value store. Implementations lock internally so the
/// store can be shared with background writers.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// One file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Unavailable)?;
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Unavailable)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process store. Used as the fallback when no directory is usable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}

/// A store that refuses every call, standing in for a missing backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStore;

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.config_dir().join("state"))
}

/// Open the on-disk store, falling back to memory when that is impossible.
pub fn open_store(config: &AppConfig) -> SharedStore {
    let Some(dir) = config.data_dir.clone().or_else(default_data_dir) else {
        tracing::warn!("no storage directory available; settings will not survive a restart");
        return Arc::new(MemoryStore::new());
    };

    match FileStore::open(&dir) {
        Ok(store) => {
            tracing::info!(dir = %store.dir().display(), "opened settings store");
            Arc::new(store)
        }
        Err(err) => {
            tracing::warn!(dir = %dir.display(), "failed to open settings store: {err}");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip_and_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path().join("state")).unwrap();

        assert_eq!(store.get("sc.base").unwrap(), None);
        store.set("sc.base", "400").unwrap();
        assert_eq!(store.get("sc.base").unwrap().as_deref(), Some("400"));

        store.set("sc.base", "512").unwrap();
        assert_eq!(store.get("sc.base").unwrap().as_deref(), Some("512"));

        store.remove("sc.base").unwrap();
        assert_eq!(store.get("sc.base").unwrap(), None);
        // Removing a missing key is not an error.
        store.remove("sc.base").unwrap();
    }

    #[test]
    fn test_file_store_keys_are_independent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.set("sc.history", "{broken").unwrap();
        store.set("sc.rate", "13.2").unwrap();

        assert_eq!(store.get("sc.rate").unwrap().as_deref(), Some("13.2"));
        assert_eq!(store.get("sc.history").unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_disabled_store_always_fails() {
        let store = DisabledStore;
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable)));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable)));
        assert!(matches!(store.remove("k"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn test_json_errors_convert_into_storage_error() {
        fn decode(raw: &str) -> Result<Vec<String>, StorageError> {
            Ok(serde_json::from_str(raw)?)
        }

        assert!(matches!(decode("[{broken"), Err(StorageError::Serde(_))));
        assert_eq!(decode("[\"ok\"]").unwrap(), vec!["ok".to_string()]);
    }

    #[test]
    fn test_open_store_uses_configured_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: Some(tmp.path().join("custom")),
            ..AppConfig::default()
        };

        let store = open_store(&config);
        store.set("sc.theme", "dark").unwrap();

        let on_disk = fs::read_to_string(tmp.path().join("custom").join("sc.theme")).unwrap();
        assert_eq!(on_disk, "dark");
    }
}
