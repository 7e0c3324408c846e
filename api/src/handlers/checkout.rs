//! Checkout handlers

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::app::{CheckoutQuote, LineRequest};
use crate::error::AppError;
use crate::AppState;

/// Request to price a cart
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<LineRequest>,
    pub coupon_code: Option<String>,
}

/// POST /api/checkout/quote
///
/// Price a cart from the catalog without placing an order.
pub async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<CheckoutQuote>, AppError> {
    let quote = state
        .orders
        .quote(&request.items, request.coupon_code.as_deref())
        .await?;

    Ok(Json(quote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quote_request() {
        let json = r#"{
            "items": [{"id": "1", "quantity": 2}, {"productId": "4", "quantity": 1}],
            "couponCode": "ENVIOGRATIS"
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[1].id.0, "4");
        assert_eq!(request.coupon_code.as_deref(), Some("ENVIOGRATIS"));
    }
}
