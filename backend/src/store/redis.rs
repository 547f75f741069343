//! Redis adapter for the key-value store

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};

use super::{KeyValueStore, StoreError};

/// Redis-backed store over a multiplexed connection manager
///
/// The manager reconnects on its own; each operation clones it, which
/// shares the underlying connection.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Open a client and build the connection manager
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::open(url).map_err(|e| StoreError::Connection(e.to_string()))?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn hash_set(&self, key: &str, field: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let _: () = conn
            .hset(key, field, value)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))?;
        Ok(())
    }

    async fn hash_values(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.manager.clone();
        conn.hvals(key)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))
    }

    async fn list_push_front(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let _: () = conn
            .lpush(key, value)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))?;
        Ok(())
    }

    async fn list_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let mut conn = self.manager.clone();
        conn.lrange(key, 0, -1)
            .await
            .map_err(|e| StoreError::Command(e.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }
}
