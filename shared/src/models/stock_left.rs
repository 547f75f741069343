//! Snapshot ledger models: end-of-day remaining stock

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sparse per-item remaining weights
///
/// Absent keys mean zero remaining. All reads go through
/// [`RemainingStock::remaining_for`] so that convention lives in one
/// place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemainingStock(BTreeMap<Uuid, f64>);

impl RemainingStock {
    /// Build from a raw mapping, recording unusable values as zero
    ///
    /// Non-finite and negative weights become `0.0` rather than failing
    /// the whole snapshot.
    pub fn sanitized(raw: BTreeMap<Uuid, f64>) -> Self {
        Self(
            raw.into_iter()
                .map(|(id, value)| {
                    let value = if value.is_finite() && value > 0.0 {
                        value
                    } else {
                        0.0
                    };
                    (id, value)
                })
                .collect(),
        )
    }

    /// Remaining weight for a fish type; absent keys read as zero
    pub fn remaining_for(&self, fish_type_id: Uuid) -> f64 {
        self.0.get(&fish_type_id).copied().unwrap_or(0.0)
    }

    /// Total remaining weight across all recorded items
    pub fn total_kg(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &f64)> {
        self.0.iter()
    }
}

impl FromIterator<(Uuid, f64)> for RemainingStock {
    fn from_iter<I: IntoIterator<Item = (Uuid, f64)>>(iter: I) -> Self {
        Self::sanitized(iter.into_iter().collect())
    }
}

/// An end-of-day remaining-stock snapshot
///
/// Immutable once appended. One snapshot covers any subset of the
/// catalog; items it omits read as zero remaining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub timestamp_ms: i64,
    pub remaining: RemainingStock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Input for recording an end-of-day snapshot
///
/// `remaining` is a structured mapping from fish type id to weight; ids
/// the caller omits are simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStockSnapshot {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub remaining: BTreeMap<Uuid, f64>,
    pub notes: Option<String>,
}
