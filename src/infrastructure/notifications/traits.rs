//! # Notifier Trait
//!
//! Port definition for the operator notification channel.
//!
//! The orchestrator treats notification as fire-and-forget: whatever
//! implementation sits behind [`Notifier`], its failures are logged
//! and absorbed, never surfaced to the caller.

use crate::domain::value_objects::QuoteResult;
use crate::infrastructure::notifications::error::NotificationResult;
use async_trait::async_trait;
use std::fmt;
use std::fmt::Write as _;

/// The content of an operator notification for one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionNotice {
    /// Requester's email address.
    pub email: String,
    /// Requester's free-form message.
    pub message: String,
    /// The server-computed quote.
    pub quote: QuoteResult,
}

impl SubmissionNotice {
    /// Returns the notification subject line.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("New quote request from {}", self.email)
    }

    /// Renders the notice as human-readable plain text.
    ///
    /// Includes the requester's contact data, the computed totals, and
    /// one line per breakdown entry in quote order.
    #[must_use]
    pub fn body(&self) -> String {
        let mut body = String::new();
        let _ = writeln!(body, "From: {}", self.email);
        if !self.message.is_empty() {
            let _ = writeln!(body, "Message: {}", self.message);
        }
        let _ = writeln!(body);
        let _ = writeln!(body, "Quoted total: {}", self.quote.total_price);
        let _ = writeln!(body, "Quoted monthly: {}", self.quote.monthly_price);
        let _ = writeln!(body);
        let _ = writeln!(body, "Breakdown:");
        if self.quote.breakdown.is_empty() {
            let _ = writeln!(body, "  (no priced selections matched)");
        }
        for line in &self.quote.breakdown {
            let _ = writeln!(
                body,
                "  {} / {}: {} one-time, {} monthly",
                line.step, line.option, line.price, line.monthly
            );
        }
        body
    }
}

/// Port for dispatching operator notifications.
#[async_trait]
pub trait Notifier: Send + Sync + fmt::Debug {
    /// Sends one notification for an accepted submission.
    ///
    /// # Errors
    ///
    /// Returns a `NotificationError` if the message cannot be built or
    /// the transport rejects it. Callers treat this as non-fatal.
    async fn notify(&self, notice: &SubmissionNotice) -> NotificationResult<()>;
}
