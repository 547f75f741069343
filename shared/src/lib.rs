//! Shared types and models for the Fish Stock Management system
//!
//! This crate contains the domain records, the API result types, and the
//! pure validation and timestamp helpers shared between the backend and
//! other components of the system.

pub mod models;
pub mod time;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
