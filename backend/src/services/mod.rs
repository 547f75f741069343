//! Business logic services for the Fish Stock Management backend

pub mod catalog;
pub mod reconciliation;
pub mod reporting;
pub mod stock_entry;
pub mod stock_left;

pub use catalog::CatalogService;
pub use reporting::ReportingService;
pub use stock_entry::StockEntryService;
pub use stock_left::StockLeftService;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Decode a batch of stored JSON documents
pub(crate) fn decode_records<T: DeserializeOwned>(raw: Vec<String>) -> AppResult<Vec<T>> {
    raw.iter()
        .map(|value| Ok(serde_json::from_str(value)?))
        .collect()
}

/// The in-band failure for absent or unusable required input fields
pub(crate) fn missing_fields() -> AppError {
    AppError::ValidationError("Missing or invalid required fields".to_string())
}
