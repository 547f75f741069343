//! HTTP handlers for the fish type catalog

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::FishType;

use crate::error::AppResult;
use crate::services::CatalogService;
use crate::AppState;

/// Payload for adding a fish type
#[derive(Debug, Deserialize)]
pub struct AddFishTypeInput {
    pub name: String,
}

/// List all known fish types
pub async fn list_fish_types(State(state): State<AppState>) -> AppResult<Json<Vec<FishType>>> {
    let service = CatalogService::new(state.store.clone());
    let fish_types = service.list().await?;
    Ok(Json(fish_types))
}

/// Add a new fish type
pub async fn add_fish_type(
    State(state): State<AppState>,
    Json(input): Json<AddFishTypeInput>,
) -> AppResult<Json<FishType>> {
    let service = CatalogService::new(state.store.clone());
    let fish_type = service.add(&input.name).await?;
    Ok(Json(fish_type))
}
