use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::StoreError;
use crate::ports::outbound::KeyValueStore;

/// In-memory key-value store. Contents vanish with the process.
#[derive(Default)]
pub struct InMemoryKVStore {
    data: RwLock<BTreeMap<String, String>>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.data.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.data.read().keys().cloned().collect())
    }
}
