//! In-memory key-value store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use pagelight_protocols::error::StorageError;
use pagelight_protocols::host::KeyValueStore;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Process-local key-value store.
///
/// Individual `get`/`set` calls are serialized by the inner lock, which
/// matches the host contract: read-modify-write sequences built on top
/// are still racy across contexts.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the full store contents, for assertions.
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.data.read().clone()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<HashMap<String, Value>, StorageError> {
        let data = self.data.read();
        Ok(keys
            .iter()
            .filter_map(|key| data.get(*key).map(|value| (key.to_string(), value.clone())))
            .collect())
    }

    async fn set(&self, entries: HashMap<String, Value>) -> Result<(), StorageError> {
        self.data.write().extend(entries);
        Ok(())
    }
}
