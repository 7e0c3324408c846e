//! SMTP notifier using lettre

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::SmtpConfig;
use crate::domain::ports::{Notification, Notifier};
use crate::error::NotifierError;

/// Sends plain-text notifications through a STARTTLS relay
#[derive(Clone)]
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build the transport. No connection is made until the first send.
    pub fn new(config: &SmtpConfig) -> Result<Self, NotifierError> {
        let from = sender(config)?;
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self { mailer, from })
    }
}

/// `"Store Name" <user@host>`
fn sender(config: &SmtpConfig) -> Result<Mailbox, NotifierError> {
    let address = config
        .username
        .parse()
        .map_err(|_| NotifierError::Address(config.username.clone()))?;
    Ok(Mailbox::new(Some(config.from_name.clone()), address))
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        let to: Mailbox = notification
            .to
            .parse()
            .map_err(|_| NotifierError::Address(notification.to.clone()))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(notification.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())?;

        self.mailer.send(email).await?;

        tracing::info!(
            order_id = %notification.order_id,
            kind = ?notification.kind,
            "Notification email sent"
        );
        Ok(())
    }
}
