// src/dtos/quote.rs
use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::product::Product;

/// A validated `{ productId, quantity }` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub product_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub product_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub breakdown: Vec<QuoteLine>,
    pub total_cost: f64,
    pub total_sale: f64,
    pub profit: f64,
}

/// Rounds to cents, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn positive_integer(value: Option<&Value>) -> Option<i64> {
    let n = match value? {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(id) = n.as_i64() {
        return (id >= 1).then_some(id);
    }
    // 3.0 is an integer too
    let f = n.as_f64()?;
    (f >= 1.0 && f.fract() == 0.0 && f <= i64::MAX as f64).then_some(f as i64)
}

fn positive_number(value: Option<&Value>) -> Option<f64> {
    value?
        .as_f64()
        .filter(|q| q.is_finite() && *q > 0.0)
}

/// Validates the raw `items` field. Every item is checked before any lookup;
/// the first violation wins.
pub fn parse_line_items(items: Option<&Value>) -> Result<Vec<LineItem>, AppError> {
    let items = match items {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(AppError::validation("'items' must be a non-empty array.")),
    };

    items
        .iter()
        .map(|item| {
            let raw_id = item.get("productId");
            let product_id = positive_integer(raw_id)
                .ok_or_else(|| AppError::validation(format!("Invalid productId: {}", describe(raw_id))))?;
            let quantity = positive_number(item.get("quantity")).ok_or_else(|| {
                AppError::validation(format!("Invalid quantity for productId {product_id}"))
            })?;
            Ok(LineItem { product_id, quantity })
        })
        .collect()
}

impl QuoteResponse {
    /// Prices resolved lines in input order.
    pub fn from_lines(lines: Vec<(LineItem, Product)>) -> Self {
        let mut total_cost = 0.0;
        let mut total_sale = 0.0;

        let breakdown = lines
            .into_iter()
            .map(|(item, product)| {
                let line_cost = product.cost_price * item.quantity;
                let line_sale = product.sale_price * item.quantity;
                total_cost += line_cost;
                total_sale += line_sale;

                QuoteLine {
                    product_id: product.id,
                    name: product.name,
                    unit: product.unit,
                    quantity: item.quantity,
                    unit_price: product.sale_price,
                    line_total: line_sale,
                }
            })
            .collect();

        Self {
            breakdown,
            total_cost: round_cents(total_cost),
            total_sale: round_cents(total_sale),
            profit: round_cents(total_sale - total_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    fn product(id: i64, cost_price: f64, sale_price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: "Virke".into(),
            unit: "m".into(),
            cost_price,
            sale_price,
            last_updated: NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
        }
    }

    fn error_message(err: AppError) -> String {
        match err {
            AppError::ValidationError(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(10.0), 10.0);
    }

    #[test]
    fn missing_or_empty_items_rejected() {
        for items in [None, Some(json!([])), Some(json!("nope")), Some(json!({"productId": 1}))] {
            let msg = error_message(parse_line_items(items.as_ref()).unwrap_err());
            assert_eq!(msg, "'items' must be a non-empty array.");
        }
    }

    #[test]
    fn invalid_product_id_cites_value() {
        let cases = [
            (json!([{"productId": 0, "quantity": 1}]), "Invalid productId: 0"),
            (json!([{"productId": 1.5, "quantity": 1}]), "Invalid productId: 1.5"),
            (json!([{"productId": "abc", "quantity": 1}]), "Invalid productId: abc"),
            (json!([{"quantity": 1}]), "Invalid productId: undefined"),
        ];
        for (items, expected) in cases {
            assert_eq!(error_message(parse_line_items(Some(&items)).unwrap_err()), expected);
        }
    }

    #[test]
    fn invalid_quantity_cites_product() {
        for quantity in [json!(0), json!(-2), json!("3"), json!(null)] {
            let items = json!([{"productId": 4, "quantity": quantity}]);
            assert_eq!(
                error_message(parse_line_items(Some(&items)).unwrap_err()),
                "Invalid quantity for productId 4"
            );
        }
    }

    #[test]
    fn first_violation_wins() {
        let items = json!([
            {"productId": 1, "quantity": 1},
            {"productId": 2, "quantity": 0},
            {"productId": -1, "quantity": 1},
        ]);
        assert_eq!(
            error_message(parse_line_items(Some(&items)).unwrap_err()),
            "Invalid quantity for productId 2"
        );
    }

    #[test]
    fn accepts_integral_floats_and_fractional_quantities() {
        let items = json!([{"productId": 3.0, "quantity": 2.5}]);
        assert_eq!(
            parse_line_items(Some(&items)).unwrap(),
            vec![LineItem { product_id: 3, quantity: 2.5 }]
        );
    }

    #[test]
    fn prices_lines_in_order() {
        let quote = QuoteResponse::from_lines(vec![
            (LineItem { product_id: 2, quantity: 3.0 }, product(2, 85.0, 159.0)),
            (LineItem { product_id: 1, quantity: 2.0 }, product(1, 45.0, 89.0)),
        ]);

        let ids: Vec<i64> = quote.breakdown.iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(quote.breakdown[1].line_total, 178.0);
        assert_eq!(quote.breakdown[1].unit_price, 89.0);
        assert_eq!(quote.total_cost, 345.0);
        assert_eq!(quote.total_sale, 655.0);
        assert_eq!(quote.profit, 310.0);
    }

    #[test]
    fn profit_matches_rounded_totals() {
        let quote = QuoteResponse::from_lines(vec![
            (LineItem { product_id: 1, quantity: 1.333 }, product(1, 45.1, 89.9)),
            (LineItem { product_id: 3, quantity: 0.7 }, product(3, 95.0, 179.0)),
        ]);
        assert!((round_cents(quote.total_sale - quote.total_cost) - quote.profit).abs() < 0.011);
    }
}
