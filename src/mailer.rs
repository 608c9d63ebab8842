//! Outbound mail delivery over SMTP.
//!
//! `Mailer` is the seam the dispatcher talks to; `SmtpMailer` is the real
//! implementation. One connection per send, STARTTLS before authentication,
//! exactly one attempt per call. Retry policy belongs to callers, and this
//! service has none.

use crate::config::Config;
use crate::render::RenderedMessage;
use async_trait::async_trait;
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// One-shot mail delivery. Implementations must not panic on transport
/// failure; errors are returned to the caller.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, message: &RenderedMessage) -> Result<(), MailError>;
}

/// Delivers through the configured SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self, MailError> {
        let creds = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        // starttls_relay upgrades the connection before AUTH; the timeout
        // bounds both the synchronous and background sends.
        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .timeout(Some(Duration::from_secs(config.send_timeout_secs)))
                .build();

        Ok(Self {
            transport,
            from: config.smtp_username.clone(),
        })
    }

    fn build_message(
        &self,
        to: &str,
        message: &RenderedMessage,
    ) -> Result<Message, MailError> {
        let content_type = if message.is_html {
            ContentType::TEXT_HTML
        } else {
            ContentType::TEXT_PLAIN
        };

        Ok(Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(message.subject.clone())
            .header(content_type)
            .body(message.body.clone())?)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, message: &RenderedMessage) -> Result<(), MailError> {
        let email = self.build_message(to, message)?;
        self.transport.send(email).await?;
        info!("Email sent to {} with subject '{}'", to, message.subject);
        Ok(())
    }
}
