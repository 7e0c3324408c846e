//! Coupon handlers

use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::app::coupons;
use crate::app::CouponApplication;
use crate::error::AppError;

/// Request to validate a coupon code
#[derive(Debug, Deserialize)]
pub struct ValidateCouponRequest {
    #[serde(default)]
    pub code: String,
    /// Amount the percentage applies to
    #[serde(default)]
    pub subtotal: Decimal,
}

/// POST /api/coupons/validate
///
/// Unknown codes answer 404 with a customer-facing message.
pub async fn validate_coupon(
    Json(request): Json<ValidateCouponRequest>,
) -> Result<Json<CouponApplication>, AppError> {
    let application = coupons::validate(&request.code, request.subtotal)?;
    Ok(Json(application))
}
