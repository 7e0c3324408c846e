//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notifier;
pub mod repositories;

pub use notifier::{Notification, NotificationKind, Notifier};
pub use repositories::{insufficient_stock, OrderRepository, ProductRepository, StatusUpdate};
