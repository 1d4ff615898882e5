use crate::error::StoreResult;
use crate::root::storage::RootStorage;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-process storage. Nothing outlives the value.
#[derive(Default)]
pub struct MemoryRootStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryRootStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .write()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl RootStorage for MemoryRootStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
