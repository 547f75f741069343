//! HTTP handlers for the snapshot ledger

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use shared::{MutationResponse, NewStockSnapshot, StockSnapshot};

use crate::error::AppResult;
use crate::services::StockLeftService;
use crate::AppState;

/// Record an end-of-day snapshot
///
/// Failures are reported in-band as `success: false`, like purchase
/// recording.
pub async fn record_stock_left(
    State(state): State<AppState>,
    Json(input): Json<NewStockSnapshot>,
) -> Json<MutationResponse> {
    let service = StockLeftService::new(state.store.clone());
    match service.record(input).await {
        Ok((_, message)) => Json(MutationResponse::ok(message)),
        Err(err) => match err.validation_message() {
            Some(message) => Json(MutationResponse::failed(message)),
            None => {
                tracing::error!("failed to record stock snapshot: {err}");
                Json(MutationResponse::failed("Failed to record end of day stock"))
            }
        },
    }
}

/// Full snapshot history
pub async fn list_stock_left(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StockSnapshot>>> {
    let service = StockLeftService::new(state.store.clone());
    let snapshots = service.list_all().await?;
    Ok(Json(snapshots))
}

/// The snapshot with the latest recorded date and time
pub async fn latest_stock_left(
    State(state): State<AppState>,
) -> AppResult<Json<Option<StockSnapshot>>> {
    let service = StockLeftService::new(state.store.clone());
    let snapshot = service.latest().await?;
    Ok(Json(snapshot))
}

/// First snapshot recorded for a date
pub async fn stock_left_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<Json<Option<StockSnapshot>>> {
    let service = StockLeftService::new(state.store.clone());
    let snapshot = service.by_date(date).await?;
    Ok(Json(snapshot))
}
