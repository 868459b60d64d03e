// src/handlers/quote.rs
use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde_json::Value;
use sqlx::SqliteConnection;
use tracing::instrument;

use crate::dtos::quote::{parse_line_items, LineItem, QuoteResponse};
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;

/// Looks up every line's product; the first unknown id rejects the whole batch.
pub async fn resolve_lines(
    conn: &mut SqliteConnection,
    items: Vec<LineItem>,
) -> Result<Vec<(LineItem, Product)>, AppError> {
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, category, unit, cost_price, sale_price, last_updated
             FROM Products WHERE id = ?",
        )
        .bind(item.product_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product not found: id {}", item.product_id)))?;

        lines.push((item, product));
    }

    Ok(lines)
}

pub async fn price_items(conn: &mut SqliteConnection, items: Vec<LineItem>) -> Result<QuoteResponse, AppError> {
    let lines = resolve_lines(conn, items).await?;
    Ok(QuoteResponse::from_lines(lines))
}

// POST /api/calculate - Price a list of line items
#[instrument(skip(state, payload))]
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuoteResponse>, AppError> {
    let Json(body) = payload?;
    let items = parse_line_items(body.get("items"))?;

    let mut conn = state.db_pool.acquire().await?;
    let quote = price_items(&mut *conn, items).await?;

    Ok(Json(quote))
}
