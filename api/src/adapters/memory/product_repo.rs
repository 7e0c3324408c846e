//! In-memory adapter for ProductRepository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::MemoryState;
use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

pub struct InMemoryProductRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryProductRepository {
    pub(crate) fn new(state: Arc<RwLock<MemoryState>>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let state = self.state.read().await;
        Ok(state.products.get(&id.0).cloned())
    }

    async fn upsert_catalog(&self, products: &[Product]) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        for product in products {
            match state.products.get_mut(&product.id.0) {
                Some(existing) => {
                    *existing = Product {
                        stock: existing.stock,
                        ..product.clone()
                    };
                }
                None => {
                    state.products.insert(product.id.0.clone(), product.clone());
                }
            }
        }
        Ok(())
    }
}
