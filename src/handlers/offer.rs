// src/handlers/offer.rs
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::dtos::offer::{CreateOfferRequest, OfferResponse};
use crate::dtos::quote::{parse_line_items, LineItem};
use crate::error::AppError;
use crate::handlers::quote::price_items;
use crate::models::offer::{OfferRequest, OfferRequestItem};
use crate::models::part::PartCategory;
use crate::state::AppState;

// POST /api/offers - Store a lead from the offer form, pricing any attached items
#[instrument(skip(state, payload))]
pub async fn create_offer(
    State(state): State<AppState>,
    payload: Result<Json<CreateOfferRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OfferResponse>), AppError> {
    let Json(req) = payload?;
    let (offer, raw_items) = req.validate()?;

    let items = match raw_items {
        Some(raw) => parse_line_items(Some(&raw))?,
        None => Vec::new(),
    };

    // Priced outside the transaction: a read before the first write turns a
    // concurrent commit into SQLITE_BUSY_SNAPSHOT on the insert.
    let quote = if items.is_empty() {
        None
    } else {
        let mut conn = state.db_pool.acquire().await?;
        Some(price_items(&mut *conn, items.clone()).await?)
    };

    // Start transaction; its first statement is a write
    let mut tx = state.db_pool.begin().await?;

    let stored = sqlx::query_as::<_, OfferRequest>(
        "INSERT INTO OfferRequests (part, name, email, phone, message)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, part, name, email, phone, message, created_at",
    )
    .bind(offer.part.id())
    .bind(&offer.name)
    .bind(&offer.email)
    .bind(&offer.phone)
    .bind(&offer.message)
    .fetch_one(&mut *tx)
    .await?;

    for (position, item) in items.iter().enumerate() {
        sqlx::query(
            "INSERT INTO OfferRequestItems (offer_id, position, product_id, quantity)
             VALUES (?, ?, ?, ?)",
        )
        .bind(stored.id)
        .bind(position as i64)
        .bind(item.product_id)
        .bind(item.quantity)
        .execute(&mut *tx)
        .await?;
    }

    // Commit transaction
    tx.commit().await?;

    info!(offer_id = stored.id, part = %offer.part, items = items.len(), "Offer request stored");

    Ok((StatusCode::CREATED, Json(OfferResponse::new(stored, offer.part, quote))))
}

// GET /api/offers/:id - Stored offer request, re-priced at current catalog prices
#[instrument(skip(state, path))]
pub async fn get_offer(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<OfferResponse>, AppError> {
    let Path(id) = path?;
    let mut conn = state.db_pool.acquire().await?;

    let offer = sqlx::query_as::<_, OfferRequest>(
        "SELECT id, part, name, email, phone, message, created_at
         FROM OfferRequests WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::not_found(format!("Offer request not found: id {id}")))?;

    let part = PartCategory::from_id(&offer.part).ok_or_else(|| {
        AppError::DatabaseError(sqlx::Error::Protocol(format!(
            "offer request {} has unknown part '{}'",
            offer.id, offer.part
        )))
    })?;

    let items: Vec<LineItem> = sqlx::query_as::<_, OfferRequestItem>(
        "SELECT product_id, quantity FROM OfferRequestItems
         WHERE offer_id = ? ORDER BY position",
    )
    .bind(offer.id)
    .fetch_all(&mut *conn)
    .await?
    .into_iter()
    .map(|row| LineItem { product_id: row.product_id, quantity: row.quantity })
    .collect();

    let quote = if items.is_empty() {
        None
    } else {
        Some(price_items(&mut *conn, items).await?)
    };

    Ok(Json(OfferResponse::new(offer, part, quote)))
}
