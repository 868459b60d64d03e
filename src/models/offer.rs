use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct OfferRequest {
    pub id: i64,
    pub part: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, FromRow)]
pub struct OfferRequestItem {
    pub product_id: i64,
    pub quantity: f64,
}
