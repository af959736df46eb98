//! # SMTP Notifier
//!
//! SMTP implementation of [`Notifier`] using lettre.
//!
//! Sends one plain-text email per accepted submission to a fixed
//! operator address. The requester's address is set as reply-to when it
//! parses as a valid mailbox, so the operator can answer directly.

use crate::config::SmtpConfig;
use crate::infrastructure::notifications::error::{NotificationError, NotificationResult};
use crate::infrastructure::notifications::traits::{Notifier, SubmissionNotice};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::fmt;

/// SMTP implementation of [`Notifier`].
///
/// # Examples
///
/// ```ignore
/// use studio_quote::config::SmtpConfig;
/// use studio_quote::infrastructure::notifications::SmtpNotifier;
///
/// let notifier = SmtpNotifier::from_config(&smtp_config)?;
/// notifier.notify(&notice).await?;
/// ```
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

impl SmtpNotifier {
    /// Creates a notifier from an existing transport and mailboxes.
    #[must_use]
    pub fn new(transport: AsyncSmtpTransport<Tokio1Executor>, from: Mailbox, to: Mailbox) -> Self {
        Self {
            transport,
            from,
            to,
        }
    }

    /// Builds a notifier from SMTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Configuration` if the relay host is
    /// invalid or the from/to addresses do not parse as mailboxes.
    pub fn from_config(config: &SmtpConfig) -> NotificationResult<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| NotificationError::configuration(format!("from address: {e}")))?;
        let to: Mailbox = config
            .to
            .parse()
            .map_err(|e| NotificationError::configuration(format!("to address: {e}")))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| NotificationError::configuration(e.to_string()))?;
        if let Some(port) = config.port {
            builder = builder.port(port);
        }
        let transport = builder
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self::new(transport, from, to))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, notice: &SubmissionNotice) -> NotificationResult<()> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(notice.subject());

        // Requester addresses come from an unauthenticated form; only a
        // parseable one becomes the reply-to.
        if let Ok(reply_to) = notice.email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let message = builder
            .body(notice.body())
            .map_err(|e| NotificationError::invalid_message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::transport(e.to_string()))?;

        Ok(())
    }
}
