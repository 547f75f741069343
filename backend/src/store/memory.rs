//! In-memory store used by tests and Redis-less development

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KeyValueStore, StoreError};

/// Process-local store with the same semantics as the Redis adapter
#[derive(Default)]
pub struct MemoryStore {
    hashes: RwLock<HashMap<String, HashMap<String, String>>>,
    lists: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn hash_set(&self, key: &str, field: &str, value: String) -> Result<(), StoreError> {
        self.hashes
            .write()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(field.to_string(), value);
        Ok(())
    }

    async fn hash_values(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .hashes
            .read()
            .await
            .get(key)
            .map(|hash| hash.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_push_front(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.lists
            .write()
            .await
            .entry(key.to_string())
            .or_default()
            .insert(0, value);
        Ok(())
    }

    async fn list_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .lists
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
