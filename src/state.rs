// src/state.rs
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handle passed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    /// Always ends with `/`.
    pub models_base_url: Arc<str>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, models_base_url: &str) -> Self {
        let models_base_url = if models_base_url.ends_with('/') {
            Arc::from(models_base_url)
        } else {
            Arc::from(format!("{models_base_url}/"))
        };
        Self { db_pool, models_base_url }
    }
}
