//! Purchase ledger models

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded stock purchase
///
/// Immutable once appended; the ledger supports no update or delete.
/// `fish_type_name` is denormalized from the catalog at write time so
/// reports stay readable without a catalog join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: Uuid,
    pub fish_type_id: Uuid,
    pub fish_type_name: String,
    pub weight_kg: f64,
    pub rate_per_kg: f64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Milliseconds derived from `date` + `time`. "Latest" queries compare
    /// this value, never insertion order.
    pub timestamp_ms: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Display-grouping token, `{fish_type_id}-{write-time ms}`. Not
    /// enforced unique.
    pub batch_id: String,
}

/// Input for recording a stock purchase
///
/// Fields mirror the entry form; all required fields are optional here so
/// missing values surface as an in-band validation failure rather than a
/// malformed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStockEntry {
    pub fish_type_id: Option<Uuid>,
    pub weight_kg: Option<f64>,
    pub rate_per_kg: Option<f64>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}
