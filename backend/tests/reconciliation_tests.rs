//! Stock reconciliation tests
//!
//! Tests for the derived-report arithmetic including:
//! - the end-to-end opening/purchases/sales/closing example
//! - the sales clamp on inconsistent data
//! - aging classification and alert ordering
//! - recent-activity ordering across both ledgers
//! - dashboard totals
//! - stable column sorting
//!
//! Property tests pin the clamp and tie-stability invariants.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use uuid::Uuid;

use fish_stock_backend::services::reconciliation::{
    age_label, dashboard_summary, recent_activity, report_rows, snapshot_prefill, sort_report_rows,
    stock_alerts,
};
use fish_stock_backend::services::{CatalogService, ReportingService, StockEntryService, StockLeftService};
use fish_stock_backend::store::{KeyValueStore, MemoryStore};
use shared::{
    time, ActivityEvent, AgeStatus, FishType, NewStockEntry, NewStockSnapshot, RemainingStock,
    ReportColumn, SortDirection, StockEntry, StockSnapshot,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn entry(fish_type: &FishType, weight: f64, rate: f64, day: &str, at: &str) -> StockEntry {
    let day: NaiveDate = day.parse().unwrap();
    let at: NaiveTime = at.parse().unwrap();
    StockEntry {
        id: Uuid::new_v4(),
        fish_type_id: fish_type.id,
        fish_type_name: fish_type.name.clone(),
        weight_kg: weight,
        rate_per_kg: rate,
        date: day,
        time: at,
        timestamp_ms: time::timestamp_ms(day, at),
        supplier: None,
        notes: None,
        batch_id: format!("{}-0", fish_type.id),
    }
}

fn snapshot(day: &str, at: &str, remaining: &[(Uuid, f64)]) -> StockSnapshot {
    let day: NaiveDate = day.parse().unwrap();
    let at: NaiveTime = at.parse().unwrap();
    StockSnapshot {
        id: Uuid::new_v4(),
        date: day,
        time: at,
        timestamp_ms: time::timestamp_ms(day, at),
        remaining: remaining.iter().cloned().collect::<RemainingStock>(),
        notes: None,
    }
}

fn fish(name: &str) -> FishType {
    FishType {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

// ============================================================================
// Report rows
// ============================================================================

#[test]
fn reconciles_opening_purchases_sales_and_closing() {
    let tuna = fish("Tuna");
    let entries = vec![entry(&tuna, 20.0, 100.0, "2024-01-02", "09:00:00")];
    let snapshots = vec![
        snapshot("2024-01-02", "18:00:00", &[(tuna.id, 8.0)]),
        snapshot("2024-01-01", "18:00:00", &[(tuna.id, 5.0)]),
    ];

    let rows = report_rows(&entries, &snapshots, date("2024-01-02"));

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.opening_stock_kg, 5.0);
    assert_eq!(row.purchases_kg, 20.0);
    assert_eq!(row.closing_stock_kg, 8.0);
    assert_eq!(row.sales_kg, 17.0);
    assert_eq!(row.total_cost, 2000.0);
    assert_eq!(row.age_days, 0);
}

#[test]
fn purchases_sum_the_whole_day_for_the_item() {
    let tuna = fish("Tuna");
    let prawns = fish("Prawns");
    let entries = vec![
        entry(&tuna, 20.0, 100.0, "2024-01-02", "09:00:00"),
        entry(&tuna, 10.0, 110.0, "2024-01-02", "12:00:00"),
        entry(&prawns, 4.0, 300.0, "2024-01-02", "09:30:00"),
        entry(&tuna, 7.0, 100.0, "2024-01-03", "09:00:00"),
    ];

    let rows = report_rows(&entries, &[], date("2024-01-03"));

    // every tuna row on 2024-01-02 carries the same day total
    assert_eq!(rows[0].purchases_kg, 30.0);
    assert_eq!(rows[1].purchases_kg, 30.0);
    assert_eq!(rows[2].purchases_kg, 4.0);
    assert_eq!(rows[3].purchases_kg, 7.0);
}

#[test]
fn sales_clamp_at_zero_when_closing_exceeds_supply() {
    let tuna = fish("Tuna");
    let entries = vec![entry(&tuna, 0.0, 100.0, "2024-01-02", "09:00:00")];
    let snapshots = vec![
        snapshot("2024-01-01", "18:00:00", &[(tuna.id, 10.0)]),
        snapshot("2024-01-02", "18:00:00", &[(tuna.id, 15.0)]),
    ];

    let rows = report_rows(&entries, &snapshots, date("2024-01-02"));

    // opening 10 + purchases 0 - closing 15 would be -5
    assert_eq!(rows[0].sales_kg, 0.0);
}

#[test]
fn missing_snapshots_read_as_zero_stock() {
    let tuna = fish("Tuna");
    let entries = vec![entry(&tuna, 20.0, 100.0, "2024-01-02", "09:00:00")];

    let rows = report_rows(&entries, &[], date("2024-01-02"));

    assert_eq!(rows[0].opening_stock_kg, 0.0);
    assert_eq!(rows[0].closing_stock_kg, 0.0);
    assert_eq!(rows[0].sales_kg, 20.0);
}

#[test]
fn opening_stock_uses_the_closest_prior_date() {
    let tuna = fish("Tuna");
    let entries = vec![entry(&tuna, 1.0, 100.0, "2024-01-10", "09:00:00")];
    let snapshots = vec![
        snapshot("2024-01-03", "18:00:00", &[(tuna.id, 3.0)]),
        snapshot("2024-01-08", "18:00:00", &[(tuna.id, 8.0)]),
        snapshot("2024-01-12", "18:00:00", &[(tuna.id, 12.0)]),
    ];

    let rows = report_rows(&entries, &snapshots, date("2024-01-12"));

    assert_eq!(rows[0].opening_stock_kg, 8.0);
}

// ============================================================================
// Aging
// ============================================================================

#[test]
fn age_labels_read_naturally() {
    assert_eq!(age_label(0), "Fresh");
    assert_eq!(age_label(1), "1 day");
    assert_eq!(age_label(4), "4 days");
}

#[test]
fn age_status_thresholds() {
    assert_eq!(AgeStatus::for_age(0), AgeStatus::Fresh);
    assert_eq!(AgeStatus::for_age(1), AgeStatus::Fresh);
    assert_eq!(AgeStatus::for_age(2), AgeStatus::Warning);
    assert_eq!(AgeStatus::for_age(3), AgeStatus::Danger);
    assert_eq!(AgeStatus::for_age(10), AgeStatus::Danger);
}

#[test]
fn alerts_rank_oldest_stock_first_and_cap_at_five() {
    let types: Vec<FishType> = (0..7).map(|n| fish(&format!("Fish {n}"))).collect();
    let mut entries = Vec::new();
    for (offset, fish_type) in types.iter().enumerate() {
        let day = format!("2024-01-{:02}", 10 - offset);
        entries.push(entry(fish_type, 1.0, 100.0, &day, "09:00:00"));
    }

    let alerts = stock_alerts(&types, &entries, date("2024-01-10"));

    assert_eq!(alerts.len(), 5);
    assert_eq!(alerts[0].age_days, 6);
    assert_eq!(alerts[0].status, AgeStatus::Danger);
    assert_eq!(alerts[4].age_days, 2);
    assert_eq!(alerts[4].status, AgeStatus::Warning);
}

#[test]
fn alert_age_counts_from_the_newest_entry() {
    let tuna = fish("Tuna");
    let entries = vec![
        entry(&tuna, 5.0, 100.0, "2024-01-01", "09:00:00"),
        entry(&tuna, 5.0, 100.0, "2024-01-04", "09:00:00"),
    ];

    let alerts = stock_alerts(std::slice::from_ref(&tuna), &entries, date("2024-01-05"));

    assert_eq!(alerts[0].age_days, 1);
    assert_eq!(alerts[0].status, AgeStatus::Fresh);
}

#[test]
fn items_without_entries_report_fresh() {
    let prawns = fish("Prawns");
    let alerts = stock_alerts(std::slice::from_ref(&prawns), &[], date("2024-01-05"));

    assert_eq!(alerts[0].age_days, 0);
    assert_eq!(alerts[0].status, AgeStatus::Fresh);
}

// ============================================================================
// Recent activity
// ============================================================================

#[test]
fn activity_merges_ledgers_by_timestamp_descending() {
    let tuna = fish("Tuna");
    let entries = vec![
        entry(&tuna, 1.0, 100.0, "2024-01-01", "09:00:00"),
        entry(&tuna, 2.0, 100.0, "2024-01-03", "09:00:00"),
    ];
    let snapshots = vec![
        snapshot("2024-01-02", "18:00:00", &[(tuna.id, 1.0)]),
        snapshot("2024-01-04", "18:00:00", &[(tuna.id, 2.0)]),
    ];

    let feed = recent_activity(&entries, &snapshots);

    let timestamps: Vec<i64> = feed.iter().map(|event| event.timestamp_ms()).collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);

    assert!(matches!(feed[0], ActivityEvent::StockLeft { .. }));
    assert!(matches!(feed[1], ActivityEvent::StockEntry { .. }));
}

#[test]
fn activity_caps_at_five_events() {
    let tuna = fish("Tuna");
    let entries: Vec<StockEntry> = (1..=8)
        .map(|n| entry(&tuna, n as f64, 100.0, &format!("2024-01-{n:02}"), "09:00:00"))
        .collect();

    let feed = recent_activity(&entries, &[]);

    assert_eq!(feed.len(), 5);
    assert_eq!(
        feed[0].timestamp_ms(),
        time::timestamp_ms(date("2024-01-08"), "09:00:00".parse().unwrap())
    );
}

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn dashboard_totals_come_from_the_latest_snapshot() {
    let tuna = fish("Tuna");
    let entries = vec![
        entry(&tuna, 12.0, 100.0, "2024-01-05", "09:00:00"),
        entry(&tuna, 3.0, 100.0, "2024-01-04", "09:00:00"),
    ];
    let latest = snapshot("2024-01-04", "18:00:00", &[(tuna.id, 30.0)]);

    let overview = dashboard_summary(&entries, Some(&latest), date("2024-01-05"));

    assert_eq!(overview.opening_stock_kg, 30.0);
    assert_eq!(overview.new_purchases_kg, 12.0);
    assert_eq!(overview.current_stock_kg, 30.0);
    // opening and current cancel, leaving today's purchases
    assert_eq!(overview.estimated_sales_kg, 12.0);
}

#[test]
fn prefill_shows_last_recorded_stock_only() {
    let tuna = fish("Tuna");
    let prawns = fish("Prawns");
    let latest = snapshot("2024-01-04", "18:00:00", &[(tuna.id, 6.5)]);

    let prefill = snapshot_prefill(&[tuna.clone(), prawns.clone()], Some(&latest));

    assert_eq!(prefill[0].fish_type, tuna);
    assert_eq!(prefill[0].current_stock_kg, 6.5);
    assert_eq!(prefill[1].current_stock_kg, 0.0);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn sorts_numeric_columns_both_ways() {
    let tuna = fish("Tuna");
    let entries = vec![
        entry(&tuna, 5.0, 300.0, "2024-01-01", "09:00:00"),
        entry(&tuna, 5.0, 100.0, "2024-01-02", "09:00:00"),
        entry(&tuna, 5.0, 200.0, "2024-01-03", "09:00:00"),
    ];
    let mut rows = report_rows(&entries, &[], date("2024-01-03"));

    sort_report_rows(&mut rows, ReportColumn::Rate, SortDirection::Asc);
    let rates: Vec<f64> = rows.iter().map(|r| r.rate_per_kg).collect();
    assert_eq!(rates, vec![100.0, 200.0, 300.0]);

    sort_report_rows(&mut rows, ReportColumn::Rate, SortDirection::Desc);
    let rates: Vec<f64> = rows.iter().map(|r| r.rate_per_kg).collect();
    assert_eq!(rates, vec![300.0, 200.0, 100.0]);
}

#[test]
fn sorting_a_string_column_keeps_tied_rows_in_place() {
    let tuna = fish("Tuna");
    let prawns = fish("Prawns");
    let entries = vec![
        entry(&tuna, 1.0, 100.0, "2024-01-01", "09:00:00"),
        entry(&prawns, 2.0, 100.0, "2024-01-01", "09:30:00"),
        entry(&tuna, 3.0, 100.0, "2024-01-02", "09:00:00"),
    ];
    let mut rows = report_rows(&entries, &[], date("2024-01-02"));
    let first_tuna = rows[0].entry_id;
    let second_tuna = rows[2].entry_id;

    sort_report_rows(&mut rows, ReportColumn::FishType, SortDirection::Asc);

    assert_eq!(rows[0].fish_type, "Prawns");
    // the two Tuna rows keep their original relative order
    assert_eq!(rows[1].entry_id, first_tuna);
    assert_eq!(rows[2].entry_id, second_tuna);
}

// ============================================================================
// End to end through the services
// ============================================================================

#[tokio::test]
async fn report_reconciles_recorded_history() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let catalog = CatalogService::new(store.clone());
    let entries = StockEntryService::new(store.clone());
    let snapshots = StockLeftService::new(store.clone());
    let reporting = ReportingService::new(store);

    let tuna = catalog.add("Tuna").await.unwrap();

    snapshots
        .record(NewStockSnapshot {
            date: Some(date("2024-01-01")),
            time: Some("18:00:00".parse().unwrap()),
            remaining: BTreeMap::from([(tuna.id, 5.0)]),
            notes: None,
        })
        .await
        .unwrap();
    entries
        .record(NewStockEntry {
            fish_type_id: Some(tuna.id),
            weight_kg: Some(20.0),
            rate_per_kg: Some(100.0),
            date: Some(date("2024-01-02")),
            time: Some("09:00:00".parse().unwrap()),
            supplier: None,
            notes: None,
        })
        .await
        .unwrap();
    snapshots
        .record(NewStockSnapshot {
            date: Some(date("2024-01-02")),
            time: Some("18:00:00".parse().unwrap()),
            remaining: BTreeMap::from([(tuna.id, 8.0)]),
            notes: None,
        })
        .await
        .unwrap();

    let rows = reporting.stock_report(None).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fish_type, "Tuna");
    assert_eq!(rows[0].opening_stock_kg, 5.0);
    assert_eq!(rows[0].purchases_kg, 20.0);
    assert_eq!(rows[0].closing_stock_kg, 8.0);
    assert_eq!(rows[0].sales_kg, 17.0);
    assert_eq!(rows[0].total_cost, 2000.0);
}

#[tokio::test]
async fn csv_export_carries_one_line_per_row() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let catalog = CatalogService::new(store.clone());
    let entries = StockEntryService::new(store.clone());
    let reporting = ReportingService::new(store);

    let tuna = catalog.add("Tuna").await.unwrap();
    entries
        .record(NewStockEntry {
            fish_type_id: Some(tuna.id),
            weight_kg: Some(20.0),
            rate_per_kg: Some(100.0),
            date: Some(date("2024-01-02")),
            time: Some("09:00:00".parse().unwrap()),
            supplier: None,
            notes: None,
        })
        .await
        .unwrap();

    let csv_data = reporting.stock_report_csv().await.unwrap();
    let lines: Vec<&str> = csv_data.trim_end().lines().collect();

    // header plus one row
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("fish_type"));
    assert!(lines[1].contains("Tuna"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn sales_are_never_negative(
        opening in 0.0f64..1e6,
        purchased in 0.0f64..1e6,
        closing in 0.0f64..1e6,
    ) {
        let tuna = fish("Tuna");
        let entries = vec![entry(&tuna, purchased, 100.0, "2024-01-02", "09:00:00")];
        let snapshots = vec![
            snapshot("2024-01-01", "18:00:00", &[(tuna.id, opening)]),
            snapshot("2024-01-02", "18:00:00", &[(tuna.id, closing)]),
        ];

        let rows = report_rows(&entries, &snapshots, date("2024-01-02"));

        prop_assert!(rows[0].sales_kg >= 0.0);
        prop_assert_eq!(rows[0].sales_kg, (opening + purchased - closing).max(0.0));
    }

    #[test]
    fn sorting_by_any_numeric_column_orders_the_rows(
        weights in proptest::collection::vec(0.1f64..1e4, 1..20),
    ) {
        let tuna = fish("Tuna");
        let entries: Vec<StockEntry> = weights
            .iter()
            .map(|w| entry(&tuna, *w, 100.0, "2024-01-02", "09:00:00"))
            .collect();
        let mut rows = report_rows(&entries, &[], date("2024-01-02"));

        sort_report_rows(&mut rows, ReportColumn::TotalCost, SortDirection::Asc);

        for pair in rows.windows(2) {
            prop_assert!(pair[0].total_cost <= pair[1].total_cost);
        }
    }
}
