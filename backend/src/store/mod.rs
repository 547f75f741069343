//! Key-value persistence for the catalog and the two ledgers
//!
//! The catalog lives in a hash (field = fish type id); the purchase and
//! snapshot ledgers are push-to-front lists. Records are stored as JSON
//! documents. Readers fetch entire structures and filter in memory.

mod memory;
mod redis;

pub use self::redis::RedisStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Store key for each data type
pub mod keys {
    pub const FISH_TYPES: &str = "fish:types";
    pub const STOCK_ENTRIES: &str = "stock:entries";
    pub const STOCK_LEFT: &str = "stock:left";
}

/// Error from the underlying key-value store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unreachable: {0}")]
    Connection(String),

    #[error("store command failed: {0}")]
    Command(String),
}

/// Minimal key-value surface the ledgers need
///
/// Each append is atomic at the store; no cross-key consistency is
/// provided or assumed. Every call is tried once, with no retries.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Upsert one field of a hash
    async fn hash_set(&self, key: &str, field: &str, value: String) -> Result<(), StoreError>;

    /// All values of a hash, in no particular order
    async fn hash_values(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Prepend a value to a list
    async fn list_push_front(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Entire list, most recently pushed first
    async fn list_all(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Connectivity probe for health reporting
    async fn ping(&self) -> Result<(), StoreError>;
}
