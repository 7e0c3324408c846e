//! Notifier port trait
//!
//! Delivers customer notifications produced by the application layer.

use async_trait::async_trait;

use crate::domain::entities::{OrderId, OrderStatus};
use crate::error::NotifierError;

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    OrderPlaced,
    StatusChanged(OrderStatus),
}

/// A rendered message ready for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub order_id: OrderId,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError>;
}
