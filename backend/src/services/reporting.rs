//! Reporting service: assembles the derived views from full ledger
//! history

use std::sync::Arc;

use chrono::Utc;
use shared::{DashboardView, ItemStock, ReportColumn, ReportRow, SortDirection};

use crate::error::{AppError, AppResult};
use crate::services::{reconciliation, CatalogService, StockEntryService, StockLeftService};
use crate::store::KeyValueStore;

/// Read-side service for reports and the dashboard
///
/// Holds no state of its own; every view recomputes from the full ledger
/// histories.
#[derive(Clone)]
pub struct ReportingService {
    catalog: CatalogService,
    entries: StockEntryService,
    snapshots: StockLeftService,
}

impl ReportingService {
    /// Create a new ReportingService instance
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog: CatalogService::new(store.clone()),
            entries: StockEntryService::new(store.clone()),
            snapshots: StockLeftService::new(store),
        }
    }

    /// Reconciliation rows for every purchase entry, optionally sorted
    pub async fn stock_report(
        &self,
        sort: Option<(ReportColumn, SortDirection)>,
    ) -> AppResult<Vec<ReportRow>> {
        let entries = self.entries.list_all().await?;
        let snapshots = self.snapshots.list_all().await?;

        let mut rows = reconciliation::report_rows(&entries, &snapshots, Utc::now().date_naive());
        if let Some((column, direction)) = sort {
            reconciliation::sort_report_rows(&mut rows, column, direction);
        }
        Ok(rows)
    }

    /// Report rows rendered as CSV
    pub async fn stock_report_csv(&self) -> AppResult<String> {
        let rows = self.stock_report(None).await?;

        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in &rows {
            wtr.serialize(row)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }

    /// Overview, aging alerts, and recent activity for the dashboard
    ///
    /// The activity feed considers only the latest snapshot alongside the
    /// purchase history.
    pub async fn dashboard(&self) -> AppResult<DashboardView> {
        let fish_types = self.catalog.list().await?;
        let entries = self.entries.list_all().await?;
        let latest = self.snapshots.latest().await?;
        let today = Utc::now().date_naive();

        let latest_only: Vec<_> = latest.iter().cloned().collect();
        Ok(DashboardView {
            overview: reconciliation::dashboard_summary(&entries, latest.as_ref(), today),
            alerts: reconciliation::stock_alerts(&fish_types, &entries, today),
            recent_activity: reconciliation::recent_activity(&entries, &latest_only),
        })
    }

    /// Per-item last recorded remaining stock, for the snapshot form
    pub async fn snapshot_prefill(&self) -> AppResult<Vec<ItemStock>> {
        let fish_types = self.catalog.list().await?;
        let latest = self.snapshots.latest().await?;
        Ok(reconciliation::snapshot_prefill(&fish_types, latest.as_ref()))
    }
}
