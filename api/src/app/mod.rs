//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and notifications.

pub mod catalog_service;
pub mod coupons;
pub mod notifications;
pub mod order_service;
pub mod pricing;
pub mod seed;

pub use catalog_service::{CatalogService, DEFAULT_RECOMMENDATIONS};
pub use coupons::CouponApplication;
pub use order_service::{LineRequest, OrderService, PlaceOrderRequest};
pub use pricing::CheckoutQuote;
