//! Mock implementations of port traits

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::{NewOrder, Order, OrderId, OrderStatus};
use crate::domain::ports::{Notification, Notifier, OrderRepository, StatusUpdate};
use crate::error::{DomainError, NotifierError};

// ============================================================================
// Recording Notifier
// ============================================================================

/// Keeps every notification it is asked to send
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    /// Notifications are dispatched on spawned tasks; poll until `count` arrive
    pub async fn wait_for(&self, count: usize) -> Vec<Notification> {
        for _ in 0..100 {
            if self.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.sent()
    }

    /// Give spawned tasks a chance to run, then report what was sent
    pub async fn settle(&self) -> Vec<Notification> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.sent()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Notifier
// ============================================================================

pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        Err(NotifierError::Address(notification.to.clone()))
    }
}

// ============================================================================
// Failing Order Repository
// ============================================================================

/// Every call fails as if the database went away
pub struct FailingOrderRepository;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl OrderRepository for FailingOrderRepository {
    async fn create(&self, _order: &NewOrder) -> Result<Order, DomainError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, DomainError> {
        Err(unavailable())
    }

    async fn update_status(
        &self,
        _id: &OrderId,
        _status: OrderStatus,
    ) -> Result<Option<StatusUpdate>, DomainError> {
        Err(unavailable())
    }
}
