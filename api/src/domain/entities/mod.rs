//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod cart;
pub mod coupon;
pub mod order;
pub mod product;

pub use cart::{Cart, CartItem};
pub use coupon::{Coupon, CouponKind, COUPONS};
pub use order::{
    Address, Customer, NewOrder, Order, OrderId, OrderItem, OrderStatus, DEFAULT_PAYMENT_METHOD,
};
pub use product::{normalize_text, Category, CategoryFilter, Product, ProductId};
