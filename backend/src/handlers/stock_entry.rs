//! HTTP handlers for the purchase ledger

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use shared::{MutationResponse, NewStockEntry, StockEntry};

use crate::error::AppResult;
use crate::services::StockEntryService;
use crate::AppState;

/// Record a stock purchase
///
/// Failures are reported in-band as `success: false`: validation errors
/// carry their own message, anything else a generic one.
pub async fn record_stock_entry(
    State(state): State<AppState>,
    Json(input): Json<NewStockEntry>,
) -> Json<MutationResponse> {
    let service = StockEntryService::new(state.store.clone());
    match service.record(input).await {
        Ok((_, message)) => Json(MutationResponse::ok(message)),
        Err(err) => match err.validation_message() {
            Some(message) => Json(MutationResponse::failed(message)),
            None => {
                tracing::error!("failed to record stock entry: {err}");
                Json(MutationResponse::failed("Failed to add stock entry"))
            }
        },
    }
}

/// Full purchase history
pub async fn list_stock_entries(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StockEntry>>> {
    let service = StockEntryService::new(state.store.clone());
    let entries = service.list_all().await?;
    Ok(Json(entries))
}

/// Purchases for one calendar date
pub async fn list_stock_entries_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<Vec<StockEntry>>> {
    let service = StockEntryService::new(state.store.clone());
    let entries = service.list_by_date(date).await?;
    Ok(Json(entries))
}

/// Query parameters for a date-range listing
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Purchases inside a timestamp range
pub async fn list_stock_entries_by_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<StockEntry>>> {
    let service = StockEntryService::new(state.store.clone());
    let entries = service.list_by_date_range(range.start, range.end).await?;
    Ok(Json(entries))
}
