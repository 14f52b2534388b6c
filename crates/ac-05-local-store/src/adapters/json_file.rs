use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::domain::StoreError;
use crate::ports::outbound::KeyValueStore;

/// File-backed key-value store.
///
/// The whole map is one JSON object on disk. Every write rewrites the file
/// through a temp file and a rename, so a crash never leaves a half-written
/// document behind.
pub struct JsonFileKVStore {
    data: RwLock<BTreeMap<String, String>>,
    path: PathBuf,
}

impl JsonFileKVStore {
    /// Open the store at `path`, loading existing contents. A missing file
    /// starts empty; an unreadable or corrupt one is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            return Err(StoreError::Backend {
                message: format!("{} is a directory", path.display()),
            });
        }
        let data = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("[ac-05] No existing store at {}", path.display());
                BTreeMap::new()
            }
            Err(err) => return Err(err.into()),
        };
        if !data.is_empty() {
            tracing::info!("[ac-05] Loaded {} keys from {}", data.len(), path.display());
        }
        Ok(Self {
            data: RwLock::new(data),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, data: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(data)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Applies `f` to a copy of the map and persists it; memory is updated only
    /// after the file write succeeds.
    fn mutate(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), StoreError> {
        let mut data = self.data.write();
        let mut working = data.clone();
        f(&mut working);
        self.save(&working)?;
        *data = working;
        Ok(())
    }
}

impl KeyValueStore for JsonFileKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.mutate(|data| {
            data.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        if !self.data.read().contains_key(key) {
            return Ok(());
        }
        self.mutate(|data| {
            data.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().keys().cloned().collect())
    }
}
