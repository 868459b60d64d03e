// src/handlers/product.rs
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use crate::dtos::product::{ProductResponse, SearchQuery};
use crate::models::product::Product;
use crate::state::AppState;
use crate::error::AppError;
use tracing::{error, instrument};

const PRODUCT_COLUMNS: &str =
    "SELECT id, name, category, unit, cost_price, sale_price, last_updated FROM Products";

// GET /api/products - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match sqlx::query_as::<_, Product>(&format!("{PRODUCT_COLUMNS} ORDER BY id"))
        .fetch_all(&state.db_pool)
        .await {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /api/products/search?q=term - Case-sensitive name substring search
#[instrument(skip(state, query))]
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let Query(params) = query?;
    let term = params
        .term()
        .ok_or_else(|| AppError::validation("Query parameter 'q' is required."))?;

    // instr() is case-sensitive and treats % and _ literally, unlike LIKE
    let products = sqlx::query_as::<_, Product>(&format!(
        "{PRODUCT_COLUMNS} WHERE instr(name, ?) > 0 ORDER BY id"
    ))
    .bind(term)
    .fetch_all(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to search products");
        AppError::from(e)
    })?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}
