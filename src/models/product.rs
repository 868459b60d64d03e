use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub last_updated: NaiveDateTime,
}
