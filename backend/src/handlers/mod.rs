//! HTTP handlers for the Fish Stock Management API

pub mod catalog;
pub mod health;
pub mod reporting;
pub mod stock_entry;
pub mod stock_left;

pub use catalog::*;
pub use health::*;
pub use reporting::*;
pub use stock_entry::*;
pub use stock_left::*;
