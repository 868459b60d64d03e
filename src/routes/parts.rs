use axum::{routing::get, Router};
use crate::handlers::part::{list_models, list_parts};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/parts", get(list_parts))
        .route("/models", get(list_models))
}
