use axum::{routing::{get, post}, Router};
use crate::handlers::offer;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/offers", post(offer::create_offer))
        .route("/offers/{id}", get(offer::get_offer))
}
