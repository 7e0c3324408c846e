//! Coupon validation
//!
//! Resolves a customer-entered code against the coupon catalog and reports
//! what it would take off a given subtotal.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::app::pricing::{max_amount, percent_of};
use crate::domain::entities::{Coupon, CouponKind};
use crate::error::DomainError;

pub const INVALID_COUPON_MESSAGE: &str = "Cupón no válido o expirado.";

/// Outcome of applying a coupon to a subtotal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponApplication {
    pub valid: bool,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub value: u32,
    pub discount_amount: Decimal,
    pub shipping_free: bool,
    pub description: String,
    pub message: String,
}

/// Find a coupon or fail with a customer-facing message
pub fn lookup(code: &str) -> Result<Coupon, DomainError> {
    Coupon::find(code).ok_or_else(|| DomainError::NotFound(INVALID_COUPON_MESSAGE.to_string()))
}

/// Validate `code` against `subtotal`.
///
/// The subtotal is whatever the caller wants the percentage applied to; the
/// checkout passes it with the volume discount already removed.
pub fn validate(code: &str, subtotal: Decimal) -> Result<CouponApplication, DomainError> {
    let coupon = lookup(code)?;
    if subtotal > max_amount() {
        return Err(DomainError::Validation(format!(
            "Subtotal must not exceed {}",
            max_amount()
        )));
    }

    let (discount_amount, shipping_free) = match coupon.kind {
        CouponKind::Percent(pct) => (
            percent_of(subtotal.max(Decimal::ZERO), Decimal::from(pct)),
            false,
        ),
        CouponKind::FreeShipping => (Decimal::ZERO, true),
    };

    tracing::info!(code = coupon.code, description = coupon.description, "Coupon applied");

    Ok(CouponApplication {
        valid: true,
        code: coupon.code.to_string(),
        kind: coupon.kind,
        value: coupon.kind.value(),
        discount_amount,
        shipping_free,
        description: coupon.description.to_string(),
        message: format!("¡Cupón aplicado! {}", coupon.description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_coupon_reports_discount() {
        let result = validate("marquito20", Decimal::new(8000, 2)).unwrap();

        assert!(result.valid);
        assert_eq!(result.code, "MARQUITO20");
        assert_eq!(result.kind, CouponKind::Percent(20));
        assert_eq!(result.value, 20);
        assert_eq!(result.discount_amount, Decimal::new(1600, 2));
        assert!(!result.shipping_free);
        assert_eq!(result.message, "¡Cupón aplicado! 20% de descuento especial");
    }

    #[test]
    fn shipping_coupon_has_no_amount() {
        let result = validate("ENVIOGRATIS", Decimal::new(3000, 2)).unwrap();

        assert!(result.shipping_free);
        assert_eq!(result.discount_amount, Decimal::ZERO);
        assert_eq!(result.value, 0);
    }

    #[test]
    fn unknown_coupon_is_not_found() {
        let err = validate("FAKE50", Decimal::new(3000, 2)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref msg) if msg == INVALID_COUPON_MESSAGE));
    }

    #[test]
    fn oversized_subtotal_is_rejected() {
        let err = validate("MARQUITO20", Decimal::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = validate("ENVIOGRATIS", max_amount() + Decimal::new(1, 2)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn largest_subtotal_still_prices() {
        let result = validate("MARQUITO20", max_amount()).unwrap();
        assert_eq!(result.discount_amount, Decimal::new(2_000_000_000, 2));
    }

    #[test]
    fn serializes_type_field() {
        let result = validate("BIENVENIDO15", Decimal::new(10000, 2)).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["type"], "percent");
        assert_eq!(json["shippingFree"], false);
        assert_eq!(json["discountAmount"], 15.0);
    }
}
