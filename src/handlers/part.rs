// src/handlers/part.rs
use axum::{extract::State, Json};

use crate::dtos::part::{ModelShapeResponse, PartResponse};
use crate::models::house::HouseShape;
use crate::models::part::PartCategory;
use crate::state::AppState;

// GET /api/parts
pub async fn list_parts() -> Json<Vec<PartResponse>> {
    Json(PartCategory::ALL.into_iter().map(PartResponse::from).collect())
}

// GET /api/models
pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelShapeResponse>> {
    Json(
        HouseShape::ALL
            .into_iter()
            .map(|shape| ModelShapeResponse::new(shape, &state.models_base_url))
            .collect(),
    )
}
