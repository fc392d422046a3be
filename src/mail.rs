//! Outbound notification sending.
//!
//! One capability: deliver a plain-text message to a single recipient from
//! the fixed sender identity. Delivery is best-effort and synchronous
//! within the calling request: no retry, no queue, no batching. The trait
//! seam exists so tests can substitute a recording implementation.

use crate::config::Settings;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Capability to send one plain-text notification per call.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends `body` to `to` with the given subject line.
    async fn send(&self, subject: &str, body: &str, to: &str) -> Result<()>;
}

/// Mailer backed by authenticated SMTP submission over STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Builds the transport from process configuration.
    ///
    /// The sender address doubles as the SMTP username, matching the
    /// single-credential submission account this deploys with.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)
            .map_err(|e| Error::Mail {
                message: e.to_string(),
            })?
            .credentials(Credentials::new(
                settings.smtp_sender.clone(),
                settings.smtp_password.clone(),
            ))
            .build();
        let sender: Mailbox = settings.smtp_sender.parse().map_err(|_| Error::Config {
            message: format!("SMTP_SENDER is not a valid address: {}", settings.smtp_sender),
        })?;
        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, subject: &str, body: &str, to: &str) -> Result<()> {
        let to: Mailbox = to.parse().map_err(|_| Error::Mail {
            message: format!("invalid recipient address: {to}"),
        })?;
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| Error::Mail {
                message: e.to_string(),
            })?;
        self.transport.send(message).await.map_err(|e| Error::Mail {
            message: e.to_string(),
        })?;
        Ok(())
    }
}
