//! In-memory adapter for OrderRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::MemoryState;
use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus};
use crate::domain::ports::{insufficient_stock, OrderRepository, StatusUpdate};
use crate::error::DomainError;

pub struct InMemoryOrderRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryOrderRepository {
    pub(crate) fn new(state: Arc<RwLock<MemoryState>>) -> Self {
        Self { state }
    }
}

fn as_stock(quantity: u32) -> i32 {
    i32::try_from(quantity).unwrap_or(i32::MAX)
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        let mut state = self.state.write().await;

        if state.orders.iter().any(|o| o.id == new_order.id) {
            return Err(DomainError::AlreadyExists(format!(
                "Order {} already exists",
                new_order.id
            )));
        }

        // Check every line before touching anything
        for item in &new_order.items {
            if let Some(product) = state.products.get(&item.product_id.0) {
                if product.stock < as_stock(item.quantity) {
                    return Err(insufficient_stock(&item.name, product.stock));
                }
            }
        }

        for item in &new_order.items {
            if let Some(product) = state.products.get_mut(&item.product_id.0) {
                product.stock = (product.stock - as_stock(item.quantity)).max(0);
            }
        }

        let order = Order::from_new(new_order.clone(), Utc::now());
        state.orders.push(order.clone());

        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let state = self.state.read().await;
        let mut orders: Vec<Order> = state.orders.iter().rev().cloned().collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(orders)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let state = self.state.read().await;
        Ok(state.orders.iter().find(|o| &o.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<StatusUpdate>, DomainError> {
        let mut state = self.state.write().await;

        Ok(state.orders.iter_mut().find(|o| &o.id == id).map(|order| {
            let previous = order.status;
            order.status = status;
            StatusUpdate {
                order: order.clone(),
                previous,
            }
        }))
    }
}
