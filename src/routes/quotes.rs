use axum::{routing::post, Router};
use crate::handlers::quote::calculate;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}
