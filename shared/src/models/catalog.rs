//! Catalog models: the fish types a vendor stocks

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fish type known to the catalog
///
/// Created once and never deleted. Identity is `id`; `name` carries no
/// enforced uniqueness but is treated as effectively unique for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishType {
    pub id: Uuid,
    pub name: String,
}

/// Default catalog seeded when the store holds no fish types
pub const DEFAULT_FISH_TYPES: [&str; 7] = [
    "Mathi Small",
    "Mathi Large",
    "Sardine Small",
    "Sardine Large",
    "Tuna Fillet",
    "King Fish",
    "Prawns",
];
