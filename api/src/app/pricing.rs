//! Checkout pricing
//!
//! Turns a cart subtotal and an optional coupon into the figures shown at
//! checkout and stored on the order. The same computation backs the quote
//! endpoint and order placement, so what the customer sees is what gets
//! charged.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::entities::{Coupon, CouponKind};

/// Round to cents, half away from zero
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Largest amount a `NUMERIC(10, 2)` column holds
pub fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// `percent`% of `amount`, rounded to cents.
///
/// Callers keep `amount` within [`max_amount`], so the multiply cannot overflow.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    round2(amount * percent / Decimal::ONE_HUNDRED)
}

/// Store pricing policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRules {
    /// Shipping is free when the subtotal is strictly above this
    pub free_shipping_over: Decimal,
    pub shipping_fee: Decimal,
    /// Volume discount applies from this subtotal (inclusive)
    pub volume_discount_from: Decimal,
    pub volume_discount_percent: Decimal,
    /// How close to the volume threshold the "add a bit more" nudge kicks in
    pub nudge_window: Decimal,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_over: Decimal::new(50, 0),
            shipping_fee: Decimal::new(999, 2),
            volume_discount_from: Decimal::new(100, 0),
            volume_discount_percent: Decimal::new(10, 0),
            nudge_window: Decimal::new(50, 0),
        }
    }
}

/// Priced checkout summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub subtotal: Decimal,
    pub volume_discount: Decimal,
    /// How much more the customer must add to unlock the volume discount
    pub amount_to_volume_discount: Decimal,
    pub near_volume_discount: bool,
    pub coupon_code: Option<String>,
    pub coupon_discount: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub savings: Decimal,
}

impl PricingRules {
    pub fn volume_discount(&self, subtotal: Decimal) -> Decimal {
        if subtotal >= self.volume_discount_from {
            percent_of(subtotal, self.volume_discount_percent)
        } else {
            Decimal::ZERO
        }
    }

    pub fn base_shipping(&self, subtotal: Decimal) -> Decimal {
        if subtotal > self.free_shipping_over {
            Decimal::ZERO
        } else {
            self.shipping_fee
        }
    }

    /// Coupon discount on an amount that already has the volume discount taken off
    pub fn coupon_discount(&self, coupon: &Coupon, discounted_subtotal: Decimal) -> Decimal {
        match coupon.kind {
            CouponKind::Percent(pct) => {
                percent_of(discounted_subtotal, Decimal::from(pct)).min(discounted_subtotal)
            }
            CouponKind::FreeShipping => Decimal::ZERO,
        }
    }

    pub fn quote(&self, subtotal: Decimal, coupon: Option<&Coupon>) -> CheckoutQuote {
        let subtotal = round2(subtotal.max(Decimal::ZERO));
        let volume_discount = self.volume_discount(subtotal);
        let amount_to_volume_discount = if subtotal < self.volume_discount_from {
            round2(self.volume_discount_from - subtotal)
        } else {
            Decimal::ZERO
        };

        let coupon_discount = coupon
            .map(|c| self.coupon_discount(c, subtotal - volume_discount))
            .unwrap_or(Decimal::ZERO);

        let shipping = if coupon.is_some_and(Coupon::is_free_shipping) {
            Decimal::ZERO
        } else {
            self.base_shipping(subtotal)
        };

        let total =
            round2(subtotal - volume_discount - coupon_discount + shipping).max(Decimal::ZERO);

        CheckoutQuote {
            subtotal,
            volume_discount,
            amount_to_volume_discount,
            near_volume_discount: amount_to_volume_discount > Decimal::ZERO
                && amount_to_volume_discount <= self.nudge_window,
            coupon_code: coupon.map(|c| c.code.to_string()),
            coupon_discount,
            shipping,
            total,
            savings: volume_discount + coupon_discount,
        }
    }
}
