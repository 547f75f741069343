//! Stock reconciliation: the pure calculations behind reports, alerts,
//! and the dashboard
//!
//! Every function here operates on full ledger histories handed in by the
//! reporting service, with evaluation time as an explicit argument.
//! Nothing is cached or persisted; each view recomputes from scratch.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use chrono::NaiveDate;
use shared::{
    time, ActivityEvent, AgeStatus, FishType, ItemStock, ReportColumn, ReportRow, SortDirection,
    StockAlert, StockEntry, StockOverview, StockSnapshot,
};
use uuid::Uuid;

/// How many events the activity feed and alert list show
const FEED_LIMIT: usize = 5;

/// Build one reconciliation row per purchase entry
///
/// Opening stock comes from the closest snapshot dated strictly before
/// the entry (compared by date only), closing stock from the first
/// snapshot dated exactly on it; items a snapshot omits read as zero.
/// Sales are clamped at zero when closing stock exceeds opening plus
/// purchases.
pub fn report_rows(
    entries: &[StockEntry],
    snapshots: &[StockSnapshot],
    today: NaiveDate,
) -> Vec<ReportRow> {
    entries
        .iter()
        .map(|entry| {
            let mut previous: Option<&StockSnapshot> = None;
            for snapshot in snapshots {
                if snapshot.date < entry.date && previous.map_or(true, |p| snapshot.date > p.date) {
                    previous = Some(snapshot);
                }
            }
            let opening_stock_kg = previous
                .map(|s| s.remaining.remaining_for(entry.fish_type_id))
                .unwrap_or(0.0);

            let purchases_kg: f64 = entries
                .iter()
                .filter(|e| e.date == entry.date && e.fish_type_id == entry.fish_type_id)
                .map(|e| e.weight_kg)
                .sum();

            let closing_stock_kg = snapshots
                .iter()
                .find(|s| s.date == entry.date)
                .map(|s| s.remaining.remaining_for(entry.fish_type_id))
                .unwrap_or(0.0);

            let sales_kg = (opening_stock_kg + purchases_kg - closing_stock_kg).max(0.0);

            ReportRow {
                entry_id: entry.id,
                date: entry.date,
                fish_type: entry.fish_type_name.clone(),
                opening_stock_kg,
                purchases_kg,
                sales_kg,
                closing_stock_kg,
                rate_per_kg: entry.rate_per_kg,
                total_cost: entry.rate_per_kg * entry.weight_kg,
                age_days: time::age_in_days(entry.date, today),
            }
        })
        .collect()
}

/// Human label for an entry's age
pub fn age_label(age_days: i64) -> String {
    match age_days {
        0 => "Fresh".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}

/// Today's dashboard totals from the purchase ledger and the latest
/// snapshot
///
/// Opening and current stock both read the latest snapshot's total, so
/// with any snapshot present the estimate reduces to today's purchases.
pub fn dashboard_summary(
    entries: &[StockEntry],
    latest: Option<&StockSnapshot>,
    today: NaiveDate,
) -> StockOverview {
    let new_purchases_kg: f64 = entries
        .iter()
        .filter(|entry| entry.date == today)
        .map(|entry| entry.weight_kg)
        .sum();

    let opening_stock_kg = latest.map(|s| s.remaining.total_kg()).unwrap_or(0.0);
    let current_stock_kg = latest.map(|s| s.remaining.total_kg()).unwrap_or(0.0);
    let estimated_sales_kg = (opening_stock_kg + new_purchases_kg - current_stock_kg).max(0.0);

    StockOverview {
        opening_stock_kg,
        new_purchases_kg,
        estimated_sales_kg,
        current_stock_kg,
    }
}

/// Aging alert per catalog item, oldest first, capped to five
///
/// An item's age counts from its newest purchase entry (by
/// `timestamp_ms`); items with no entries report age zero.
pub fn stock_alerts(
    fish_types: &[FishType],
    entries: &[StockEntry],
    today: NaiveDate,
) -> Vec<StockAlert> {
    let mut newest: HashMap<Uuid, &StockEntry> = HashMap::new();
    for entry in entries {
        newest
            .entry(entry.fish_type_id)
            .and_modify(|current| {
                if entry.timestamp_ms > current.timestamp_ms {
                    *current = entry;
                }
            })
            .or_insert(entry);
    }

    let mut alerts: Vec<StockAlert> = fish_types
        .iter()
        .map(|fish_type| {
            let age_days = newest
                .get(&fish_type.id)
                .map(|entry| time::age_in_days(entry.date, today))
                .unwrap_or(0);
            StockAlert {
                fish_type: fish_type.name.clone(),
                age_days,
                status: AgeStatus::for_age(age_days),
            }
        })
        .collect();

    alerts.sort_by_key(|alert| Reverse(alert.age_days));
    alerts.truncate(FEED_LIMIT);
    alerts
}

/// Latest events across both ledgers, strictly by timestamp, capped to
/// five
pub fn recent_activity(entries: &[StockEntry], snapshots: &[StockSnapshot]) -> Vec<ActivityEvent> {
    let mut events: Vec<ActivityEvent> = entries
        .iter()
        .map(|entry| ActivityEvent::StockEntry {
            timestamp_ms: entry.timestamp_ms,
            fish_type: entry.fish_type_name.clone(),
            weight_kg: entry.weight_kg,
            rate_per_kg: entry.rate_per_kg,
        })
        .chain(snapshots.iter().map(|snapshot| ActivityEvent::StockLeft {
            timestamp_ms: snapshot.timestamp_ms,
            total_kg: snapshot.remaining.total_kg(),
        }))
        .collect();

    events.sort_by_key(|event| Reverse(event.timestamp_ms()));
    events.truncate(FEED_LIMIT);
    events
}

/// Last recorded remaining stock per catalog item, for the snapshot form
///
/// Purchases made since that snapshot are not added on top; the pre-fill
/// shows the last recorded figure only.
pub fn snapshot_prefill(
    fish_types: &[FishType],
    latest: Option<&StockSnapshot>,
) -> Vec<ItemStock> {
    fish_types
        .iter()
        .map(|fish_type| ItemStock {
            current_stock_kg: latest
                .map(|s| s.remaining.remaining_for(fish_type.id))
                .unwrap_or(0.0),
            fish_type: fish_type.clone(),
        })
        .collect()
}

/// Stable sort of report rows by one column
///
/// String columns compare lexicographically, numeric columns numerically;
/// rows that compare equal keep their original order.
pub fn sort_report_rows(rows: &mut [ReportRow], column: ReportColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            ReportColumn::Date => a.date.cmp(&b.date),
            ReportColumn::FishType => a.fish_type.cmp(&b.fish_type),
            ReportColumn::OpeningStock => cmp_f64(a.opening_stock_kg, b.opening_stock_kg),
            ReportColumn::Purchases => cmp_f64(a.purchases_kg, b.purchases_kg),
            ReportColumn::Sales => cmp_f64(a.sales_kg, b.sales_kg),
            ReportColumn::ClosingStock => cmp_f64(a.closing_stock_kg, b.closing_stock_kg),
            ReportColumn::Rate => cmp_f64(a.rate_per_kg, b.rate_per_kg),
            ReportColumn::TotalCost => cmp_f64(a.total_cost, b.total_cost),
            ReportColumn::Age => a.age_days.cmp(&b.age_days),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
