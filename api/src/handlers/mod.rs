//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod checkout;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod status;

pub use checkout::quote;
pub use coupons::validate_coupon;
pub use orders::{get_order, list_orders, place_order, update_status};
pub use products::{get_product, list_products, recommendations};
pub use status::status;
