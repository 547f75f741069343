//! HTTP handlers for reports and the dashboard

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{DashboardView, ItemStock, ReportColumn, ReportRow, SortDirection};

use crate::error::AppResult;
use crate::services::ReportingService;
use crate::AppState;

/// Query parameters for the stock report
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub sort_by: Option<ReportColumn>,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Reconciliation report rows
pub async fn get_stock_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<ReportRow>>> {
    let service = ReportingService::new(state.store.clone());
    let sort = query.sort_by.map(|column| (column, query.direction));
    let rows = service.stock_report(sort).await?;
    Ok(Json(rows))
}

/// Report rows as a CSV attachment
pub async fn export_stock_report(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.store.clone());
    let csv_data = service.stock_report_csv().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"stock-report.csv\"",
            ),
        ],
        csv_data,
    ))
}

/// Dashboard overview, aging alerts, and recent activity
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardView>> {
    let service = ReportingService::new(state.store.clone());
    let dashboard = service.dashboard().await?;
    Ok(Json(dashboard))
}

/// Pre-fill values for the end-of-day snapshot form
pub async fn get_snapshot_prefill(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ItemStock>>> {
    let service = ReportingService::new(state.store.clone());
    let prefill = service.snapshot_prefill().await?;
    Ok(Json(prefill))
}
