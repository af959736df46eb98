//! # Submission Entity
//!
//! An accepted quote request, persisted for downstream fulfillment.
//!
//! A [`SubmissionRecord`] is created exactly once per accepted
//! submission and is never updated or deleted afterwards. The totals it
//! carries are the server-computed figures; the optional
//! `price_estimate` is the display text the client showed the user and
//! is informational only.

use crate::domain::value_objects::{QuoteResult, Selections, SubmissionId};
use chrono::{DateTime, Utc};

/// An immutable, append-only record of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    id: SubmissionId,
    email: String,
    message: String,
    selections: Selections,
    total_price: u64,
    monthly_price: u64,
    price_estimate: Option<String>,
    created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Creates a record for an accepted submission.
    ///
    /// Generates a fresh identifier and timestamps the record with the
    /// current UTC time. Totals are taken from the server-computed
    /// quote, never from caller input.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        message: impl Into<String>,
        selections: Selections,
        quote: &QuoteResult,
        price_estimate: Option<String>,
    ) -> Self {
        Self {
            id: SubmissionId::new_v4(),
            email: email.into(),
            message: message.into(),
            selections,
            total_price: quote.total_price,
            monthly_price: quote.monthly_price,
            price_estimate,
            created_at: Utc::now(),
        }
    }

    /// Returns the submission identifier.
    #[must_use]
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }

    /// Returns the requester's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the requester's free-form message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the selections exactly as submitted.
    #[must_use]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Returns the server-computed one-time total.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Returns the server-computed monthly total.
    #[must_use]
    pub fn monthly_price(&self) -> u64 {
        self.monthly_price
    }

    /// Returns the client's display estimate, if one was sent.
    #[must_use]
    pub fn price_estimate(&self) -> Option<&str> {
        self.price_estimate.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::services::pricing;
    use crate::domain::value_objects::RuleCatalog;

    #[test]
    fn record_carries_server_computed_totals() {
        let selections = Selections::new().with("type", "showcase");
        let quote = pricing::evaluate(&selections, &RuleCatalog::standard());

        let record = SubmissionRecord::new(
            "client@example.com",
            "please call me",
            selections.clone(),
            &quote,
            Some("8 000 kr".to_string()),
        );

        assert_eq!(record.email(), "client@example.com");
        assert_eq!(record.total_price(), 8000);
        assert_eq!(record.monthly_price(), 0);
        assert_eq!(record.selections(), &selections);
        assert_eq!(record.price_estimate(), Some("8 000 kr"));
    }

    #[test]
    fn each_record_gets_its_own_id() {
        let quote = QuoteResult::zero();
        let a = SubmissionRecord::new("a@example.com", "", Selections::new(), &quote, None);
        let b = SubmissionRecord::new("b@example.com", "", Selections::new(), &quote, None);
        assert_ne!(a.id(), b.id());
    }
}
