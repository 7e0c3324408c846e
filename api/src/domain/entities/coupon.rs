//! Coupon domain entity

use serde::Serialize;

/// What a coupon does to the checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponKind {
    /// Percentage off the (already volume-discounted) subtotal
    Percent(u32),
    /// Waives the shipping fee
    FreeShipping,
}

impl CouponKind {
    /// Wire name used by the storefront: `percent` or `shipping`
    pub fn type_name(&self) -> &'static str {
        match self {
            CouponKind::Percent(_) => "percent",
            CouponKind::FreeShipping => "shipping",
        }
    }

    /// Numeric value reported alongside the type (0 for free shipping)
    pub fn value(&self) -> u32 {
        match self {
            CouponKind::Percent(pct) => *pct,
            CouponKind::FreeShipping => 0,
        }
    }
}

impl Serialize for CouponKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coupon {
    pub code: &'static str,
    pub kind: CouponKind,
    pub description: &'static str,
}

/// Coupons currently accepted by the store
pub const COUPONS: [Coupon; 4] = [
    Coupon {
        code: "MARQUITO10",
        kind: CouponKind::Percent(10),
        description: "10% de descuento",
    },
    Coupon {
        code: "BIENVENIDO15",
        kind: CouponKind::Percent(15),
        description: "15% de descuento de bienvenida",
    },
    Coupon {
        code: "ENVIOGRATIS",
        kind: CouponKind::FreeShipping,
        description: "Envío gratuito",
    },
    Coupon {
        code: "MARQUITO20",
        kind: CouponKind::Percent(20),
        description: "20% de descuento especial",
    },
];

impl Coupon {
    /// Look up a coupon by code, ignoring case and surrounding whitespace
    pub fn find(code: &str) -> Option<Coupon> {
        let wanted = code.trim().to_uppercase();
        if wanted.is_empty() {
            return None;
        }
        COUPONS.iter().copied().find(|c| c.code == wanted)
    }

    pub fn is_free_shipping(&self) -> bool {
        self.kind == CouponKind::FreeShipping
    }
}
