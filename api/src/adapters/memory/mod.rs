//! In-memory adapters
//!
//! Fallback storage used when PostgreSQL is unreachable at startup. Products
//! and orders share one lock so that placing an order and reserving its
//! stock happen together, mirroring the database transaction.

pub mod order_repo;
pub mod product_repo;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{Order, Product};

pub use order_repo::InMemoryOrderRepository;
pub use product_repo::InMemoryProductRepository;

#[derive(Default)]
pub(crate) struct MemoryState {
    /// Keyed by product id; iteration order matches `ORDER BY id`
    pub products: BTreeMap<String, Product>,
    /// Insertion order
    pub orders: Vec<Order>,
}

/// Shared handle to the in-memory store
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> InMemoryProductRepository {
        InMemoryProductRepository::new(self.state.clone())
    }

    pub fn orders(&self) -> InMemoryOrderRepository {
        InMemoryOrderRepository::new(self.state.clone())
    }
}
