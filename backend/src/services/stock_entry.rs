//! Purchase ledger service
//!
//! An append-only log of stock purchases; entries are never updated or
//! deleted once written.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use shared::{time, validation, NewStockEntry, StockEntry};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::{decode_records, missing_fields, CatalogService};
use crate::store::{keys, KeyValueStore};

/// Append-only ledger of stock purchases
#[derive(Clone)]
pub struct StockEntryService {
    store: Arc<dyn KeyValueStore>,
    catalog: CatalogService,
}

impl StockEntryService {
    /// Create a new StockEntryService instance
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let catalog = CatalogService::new(store.clone());
        Self { store, catalog }
    }

    /// Validate and append a purchase
    ///
    /// Returns the stored entry and a confirmation message summarizing
    /// quantity, item, and price.
    pub async fn record(&self, input: NewStockEntry) -> AppResult<(StockEntry, String)> {
        let fish_type_id = input.fish_type_id.ok_or_else(missing_fields)?;
        let weight_kg = input.weight_kg.ok_or_else(missing_fields)?;
        let rate_per_kg = input.rate_per_kg.ok_or_else(missing_fields)?;
        let date = input.date.ok_or_else(missing_fields)?;
        let time_of_day = input.time.ok_or_else(missing_fields)?;

        if validation::validate_positive(weight_kg).is_err()
            || validation::validate_positive(rate_per_kg).is_err()
        {
            return Err(missing_fields());
        }

        let fish_type = self
            .catalog
            .find(fish_type_id)
            .await?
            .ok_or_else(|| AppError::ValidationError("Invalid fish type".to_string()))?;

        let entry = StockEntry {
            id: Uuid::new_v4(),
            fish_type_id,
            fish_type_name: fish_type.name,
            weight_kg,
            rate_per_kg,
            date,
            time: time_of_day,
            timestamp_ms: time::timestamp_ms(date, time_of_day),
            supplier: input.supplier.filter(|s| !s.trim().is_empty()),
            notes: input.notes.filter(|s| !s.trim().is_empty()),
            batch_id: format!("{}-{}", fish_type_id, Utc::now().timestamp_millis()),
        };

        let value = serde_json::to_string(&entry)?;
        self.store.list_push_front(keys::STOCK_ENTRIES, value).await?;

        let message = format!(
            "Added {}kg of {} at ₹{}/kg",
            entry.weight_kg, entry.fish_type_name, entry.rate_per_kg
        );
        tracing::debug!(id = %entry.id, batch = %entry.batch_id, "recorded stock entry");
        Ok((entry, message))
    }

    /// Full purchase history, most recently appended first
    ///
    /// Callers that care about chronology re-sort by `timestamp_ms`; store
    /// order only reflects insertion.
    pub async fn list_all(&self) -> AppResult<Vec<StockEntry>> {
        decode_records(self.store.list_all(keys::STOCK_ENTRIES).await?)
    }

    /// Purchases recorded for exactly the given date
    pub async fn list_by_date(&self, date: NaiveDate) -> AppResult<Vec<StockEntry>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect())
    }

    /// Purchases whose date falls inside `[start, end]`
    ///
    /// Bounds carry full timestamp precision while each entry is compared
    /// at midnight of its date; an `end` bound earlier than midnight of
    /// its own day therefore excludes that day's entries.
    pub async fn list_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<StockEntry>> {
        let start_ms = start.and_utc().timestamp_millis();
        let end_ms = end.and_utc().timestamp_millis();

        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|entry| {
                let entry_ms = time::midnight_ms(entry.date);
                entry_ms >= start_ms && entry_ms <= end_ms
            })
            .collect())
    }
}
