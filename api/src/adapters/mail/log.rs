//! Log-only notifier

use async_trait::async_trait;

use crate::domain::ports::{Notification, Notifier};
use crate::error::NotifierError;

/// Used when SMTP is not configured. Records what would have been sent.
#[derive(Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        tracing::info!(
            order_id = %notification.order_id,
            kind = ?notification.kind,
            to = %notification.to,
            subject = %notification.subject,
            "SMTP not configured, skipping notification email"
        );
        Ok(())
    }
}
