//! Route definitions for the Fish Stock Management API

use axum::{
    routing::get,
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Fish type catalog
        .nest("/fish-types", fish_type_routes())
        // Purchase ledger
        .nest("/stock-entries", stock_entry_routes())
        // Snapshot ledger
        .nest("/stock-left", stock_left_routes())
        // Derived reports
        .nest("/reports", report_routes())
        // Dashboard view
        .route("/dashboard", get(handlers::get_dashboard))
}

/// Fish type catalog routes
fn fish_type_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::list_fish_types).post(handlers::add_fish_type),
    )
}

/// Purchase ledger routes
fn stock_entry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_stock_entries).post(handlers::record_stock_entry),
        )
        .route("/range", get(handlers::list_stock_entries_by_range))
        .route("/by-date/:date", get(handlers::list_stock_entries_by_date))
}

/// Snapshot ledger routes
fn stock_left_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_stock_left).post(handlers::record_stock_left),
        )
        .route("/latest", get(handlers::latest_stock_left))
        .route("/prefill", get(handlers::get_snapshot_prefill))
        .route("/by-date/:date", get(handlers::stock_left_by_date))
}

/// Reporting routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/stock", get(handlers::get_stock_report))
        .route("/stock/export", get(handlers::export_stock_report))
}
