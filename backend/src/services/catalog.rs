//! Catalog service for the set of known fish types

use std::sync::Arc;

use shared::{validation, FishType, DEFAULT_FISH_TYPES};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::decode_records;
use crate::store::{keys, KeyValueStore};

/// Append-only catalog of fish types
///
/// Types are created once and never deleted; there are no update
/// operations.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn KeyValueStore>,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All known fish types, in no particular order
    pub async fn list(&self) -> AppResult<Vec<FishType>> {
        decode_records(self.store.hash_values(keys::FISH_TYPES).await?)
    }

    /// Look up a fish type by id
    pub async fn find(&self, id: Uuid) -> AppResult<Option<FishType>> {
        Ok(self.list().await?.into_iter().find(|ft| ft.id == id))
    }

    /// Add a new fish type under a fresh id
    pub async fn add(&self, name: &str) -> AppResult<FishType> {
        validation::validate_item_name(name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let fish_type = FishType {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
        };
        let value = serde_json::to_string(&fish_type)?;
        self.store
            .hash_set(keys::FISH_TYPES, &fish_type.id.to_string(), value)
            .await?;

        tracing::debug!(id = %fish_type.id, name = %fish_type.name, "added fish type");
        Ok(fish_type)
    }

    /// Seed the default catalog when no fish types exist
    ///
    /// A no-op on any non-empty catalog, whatever it contains. Returns the
    /// number of types created.
    pub async fn ensure_defaults(&self) -> AppResult<usize> {
        if !self.list().await?.is_empty() {
            return Ok(0);
        }

        for name in DEFAULT_FISH_TYPES {
            self.add(name).await?;
        }
        Ok(DEFAULT_FISH_TYPES.len())
    }
}
