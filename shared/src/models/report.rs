//! Derived report and dashboard view models
//!
//! Everything here is computed from the ledgers on each read; none of it
//! is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FishType;

/// One line of the stock reconciliation report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub entry_id: Uuid,
    pub date: NaiveDate,
    pub fish_type: String,
    pub opening_stock_kg: f64,
    pub purchases_kg: f64,
    pub sales_kg: f64,
    pub closing_stock_kg: f64,
    pub rate_per_kg: f64,
    pub total_cost: f64,
    pub age_days: i64,
}

/// Freshness classification for aging stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeStatus {
    Fresh,
    Warning,
    Danger,
}

impl AgeStatus {
    /// Classify an age in whole days
    pub fn for_age(age_days: i64) -> Self {
        if age_days >= 3 {
            AgeStatus::Danger
        } else if age_days == 2 {
            AgeStatus::Warning
        } else {
            AgeStatus::Fresh
        }
    }

    /// Badge text shown next to an alert
    pub fn label(&self) -> &'static str {
        match self {
            AgeStatus::Fresh => "Fresh",
            AgeStatus::Warning => "Moderate",
            AgeStatus::Danger => "Urgent",
        }
    }
}

/// Aging alert for one fish type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAlert {
    pub fish_type: String,
    pub age_days: i64,
    pub status: AgeStatus,
}

/// Today's stock totals for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockOverview {
    pub opening_stock_kg: f64,
    pub new_purchases_kg: f64,
    pub estimated_sales_kg: f64,
    pub current_stock_kg: f64,
}

/// A recent ledger event for the activity feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityEvent {
    StockEntry {
        timestamp_ms: i64,
        fish_type: String,
        weight_kg: f64,
        rate_per_kg: f64,
    },
    StockLeft {
        timestamp_ms: i64,
        total_kg: f64,
    },
}

impl ActivityEvent {
    pub fn timestamp_ms(&self) -> i64 {
        match self {
            ActivityEvent::StockEntry { timestamp_ms, .. } => *timestamp_ms,
            ActivityEvent::StockLeft { timestamp_ms, .. } => *timestamp_ms,
        }
    }
}

/// Dashboard composition: overview, aging alerts, recent activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub overview: StockOverview,
    pub alerts: Vec<StockAlert>,
    pub recent_activity: Vec<ActivityEvent>,
}

/// Pre-fill line for the end-of-day snapshot form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStock {
    pub fish_type: FishType,
    pub current_stock_kg: f64,
}

/// Sortable report columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportColumn {
    Date,
    FishType,
    OpeningStock,
    Purchases,
    Sales,
    ClosingStock,
    Rate,
    TotalCost,
    Age,
}
