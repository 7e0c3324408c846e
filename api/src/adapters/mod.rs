//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mail;
pub mod memory;
pub mod postgres;

pub use mail::{LogNotifier, SmtpNotifier};
pub use memory::MemoryStore;
pub use postgres::{PostgresOrderRepository, PostgresProductRepository};
