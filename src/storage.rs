use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Persisted record keys, kept compatible with the v2 layout.
pub const HISTORY_KEY: &str = "charm_history_v2";
pub const SETTINGS_KEY: &str = "charm_settings_v2";
/// Raw mirror of the last-entered date, written on every date change.
pub const LAST_DATE_KEY: &str = "charm_last_date_v2";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("data directory not found")]
    NoDataDir,
}

/// String-keyed persistence capability. The history and settings layers
/// serialize to JSON above this; the last-date mirror stores a raw
/// string. Injected so tests run against [`MemoryStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One file per key under the platform data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store at the default location, creating it if needed.
    pub fn open() -> Result<Self, StorageError> {
        let dir = dirs::data_local_dir()
            .ok_or(StorageError::NoDataDir)?
            .join("charm");
        Self::at(dir)
    }

    /// Open the store rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory fake for tests; never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }
}
