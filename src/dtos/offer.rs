// src/dtos/offer.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dtos::quote::QuoteResponse;
use crate::error::AppError;
use crate::models::part::PartCategory;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub part_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Same shape as the calculate body's `items`; validated by the quote rules.
    pub items: Option<Value>,
}

/// Contact fields after validation.
#[derive(Debug)]
pub struct ValidOffer {
    pub part: PartCategory,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

impl CreateOfferRequest {
    pub fn validate(self) -> Result<(ValidOffer, Option<Value>), AppError> {
        let part = PartCategory::from_id(&self.part_id)
            .ok_or_else(|| AppError::validation(format!("Unknown partId: {}", self.part_id)))?;

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Name is required."));
        }

        let email = self.email.trim().to_string();
        if !looks_like_email(&email) {
            return Err(AppError::validation(format!("Invalid email: {email}")));
        }

        let offer = ValidOffer {
            part,
            name,
            email,
            phone: non_blank(self.phone),
            message: non_blank(self.message),
        };
        Ok((offer, self.items.filter(|v| !v.is_null())))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub id: i64,
    pub part_id: PartCategory,
    pub part_title: &'static str,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub created_at: String,
    pub quote: Option<QuoteResponse>,
}

impl OfferResponse {
    pub fn new(offer: crate::models::offer::OfferRequest, part: PartCategory, quote: Option<QuoteResponse>) -> Self {
        Self {
            id: offer.id,
            part_id: part,
            part_title: part.title(),
            name: offer.name,
            email: offer.email,
            phone: offer.phone,
            message: offer.message,
            created_at: offer.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            quote,
        }
    }
}
