// src/dtos/product.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Trimmed, non-blank search term.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub last_updated: String,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            unit: product.unit,
            cost_price: product.cost_price,
            sale_price: product.sale_price,
            last_updated: product.last_updated.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
