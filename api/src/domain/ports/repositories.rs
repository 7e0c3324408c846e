//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL, in-memory).

use async_trait::async_trait;

use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus, Product, ProductId};
use crate::error::DomainError;

/// Repository for catalog products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products ordered by id
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Insert or refresh catalog entries.
    ///
    /// Existing rows get their descriptive fields and price updated but keep
    /// their current stock; new rows start with the given stock.
    async fn upsert_catalog(&self, products: &[Product]) -> Result<(), DomainError>;
}

/// Result of a status update
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub order: Order,
    pub previous: OrderStatus,
}

impl StatusUpdate {
    pub fn changed(&self) -> bool {
        self.previous != self.order.status
    }
}

/// Repository for orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and reserve its stock, all or nothing.
    ///
    /// Fails with `Conflict` when any line asks for more than the available
    /// stock and with `AlreadyExists` when the id is taken. Lines whose
    /// product is not in the catalog are stored without touching stock.
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// All orders with their items, newest first
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Set the status of an order. Returns `None` if the order does not exist.
    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<StatusUpdate>, DomainError>;
}

/// Error for an order line that asks for more than is on the shelf
pub fn insufficient_stock(product_name: &str, available: i32) -> DomainError {
    DomainError::Conflict(format!(
        "Stock insuficiente para \"{}\". Disponible: {}.",
        product_name, available
    ))
}
