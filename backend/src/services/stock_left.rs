//! Snapshot ledger service
//!
//! End-of-day remaining-stock records, one sparse item mapping per
//! snapshot. Append-only, like the purchase ledger.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{time, NewStockSnapshot, RemainingStock, StockSnapshot};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::{decode_records, missing_fields};
use crate::store::{keys, KeyValueStore};

/// Append-only ledger of end-of-day snapshots
#[derive(Clone)]
pub struct StockLeftService {
    store: Arc<dyn KeyValueStore>,
}

impl StockLeftService {
    /// Create a new StockLeftService instance
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Append a snapshot
    ///
    /// The item mapping is sanitized rather than validated: unusable
    /// weights are recorded as zero, and omitted items stay absent (they
    /// read as zero). Returns the stored snapshot and a confirmation
    /// summarizing total remaining weight.
    pub async fn record(&self, input: NewStockSnapshot) -> AppResult<(StockSnapshot, String)> {
        let date = input.date.ok_or_else(missing_fields)?;
        let time_of_day = input.time.ok_or_else(missing_fields)?;

        let snapshot = StockSnapshot {
            id: Uuid::new_v4(),
            date,
            time: time_of_day,
            timestamp_ms: time::timestamp_ms(date, time_of_day),
            remaining: RemainingStock::sanitized(input.remaining),
            notes: input.notes.filter(|s| !s.trim().is_empty()),
        };

        let value = serde_json::to_string(&snapshot)?;
        self.store.list_push_front(keys::STOCK_LEFT, value).await?;

        let message = format!(
            "Recorded {}kg of remaining stock",
            snapshot.remaining.total_kg()
        );
        tracing::debug!(id = %snapshot.id, date = %snapshot.date, "recorded stock snapshot");
        Ok((snapshot, message))
    }

    /// Full snapshot history, most recently appended first
    pub async fn list_all(&self) -> AppResult<Vec<StockSnapshot>> {
        decode_records(self.store.list_all(keys::STOCK_LEFT).await?)
    }

    /// The snapshot with the greatest `timestamp_ms`
    ///
    /// Snapshots entered out of chronological order still resolve by
    /// their recorded date and time, not by append order.
    pub async fn latest(&self) -> AppResult<Option<StockSnapshot>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .max_by_key(|snapshot| snapshot.timestamp_ms))
    }

    /// First snapshot recorded for the given date, in store order
    ///
    /// When duplicates exist for a date, the most recently appended one
    /// wins.
    pub async fn by_date(&self, date: NaiveDate) -> AppResult<Option<StockSnapshot>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|snapshot| snapshot.date == date))
    }
}
