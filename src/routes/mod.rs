pub mod products;
pub mod quotes;
pub mod offers;
pub mod parts;

use axum::{routing::get, Router};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(quotes::routes())
        .merge(offers::routes())
        .merge(parts::routes())
}

/// Empty origin list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Full application: API under `/api`, plus banner and health check.
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", create_router())
        .route("/", get(|| async { "Offer For You API" }))
        .route("/health", get(health_check))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
