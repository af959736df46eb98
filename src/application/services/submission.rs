//! # Submission Service
//!
//! Orchestrates acceptance of a quote submission.
//!
//! The pipeline per submission is: validate, price, persist, notify,
//! acknowledge. Validation happens before any side effect. Pricing
//! always runs against the injected rule catalog; totals a client may
//! have sent along are logged for comparison and stored as display
//! text, but the canonical figures are recomputed here every time.
//! Persistence failure fails the call. Notification failure does not:
//! it is logged and the submission is still acknowledged, and when no
//! notifier is configured dispatch is skipped silently.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::SubmissionRecord;
use crate::domain::services::pricing;
use crate::domain::value_objects::{RuleCatalog, Selections, SubmissionId};
use crate::infrastructure::notifications::{Notifier, SubmissionNotice};
use crate::infrastructure::persistence::SubmissionRepository;
use std::sync::Arc;

/// A submission as received from the HTTP boundary.
///
/// `email` and `selections` are required; everything else is optional.
/// The reported totals and estimate are whatever the client's own
/// calculator showed — informational only, never authoritative.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    /// Requester's email address.
    pub email: Option<String>,
    /// Requester's free-form message.
    pub message: Option<String>,
    /// The wizard selections.
    pub selections: Option<Selections>,
    /// Client-computed one-time total, for display logging only.
    pub reported_total: Option<u64>,
    /// Client-computed monthly total, for display logging only.
    pub reported_monthly: Option<u64>,
    /// Client-rendered price text, stored verbatim for inspection.
    pub price_estimate: Option<String>,
}

/// Outcome of an accepted submission.
///
/// Carries the server-computed totals. The record id stays internal;
/// it is logged but not handed to the caller as a trust token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAccepted {
    /// Identifier of the persisted record.
    pub id: SubmissionId,
    /// Server-computed one-time total.
    pub total_price: u64,
    /// Server-computed monthly total.
    pub monthly_price: u64,
}

/// Orchestrator for the submission pipeline.
///
/// Stateless across calls: the catalog is shared immutable data and
/// the collaborators are injected ports, so arbitrarily many
/// submissions may run concurrently.
#[derive(Debug, Clone)]
pub struct SubmissionService {
    catalog: Arc<RuleCatalog>,
    repository: Arc<dyn SubmissionRepository>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl SubmissionService {
    /// Creates a new submission service.
    #[must_use]
    pub fn new(
        catalog: Arc<RuleCatalog>,
        repository: Arc<dyn SubmissionRepository>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> Self {
        Self {
            catalog,
            repository,
            notifier,
        }
    }

    /// Accepts a submission: validates, prices, persists, notifies.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` when `email` or
    /// `selections` is missing (before any side effect), or
    /// `ApplicationError::Repository` when the store rejects the write.
    /// Notification failures are logged and never returned.
    pub async fn submit(&self, request: SubmissionRequest) -> ApplicationResult<SubmissionAccepted> {
        let email = match request.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => return Err(ApplicationError::missing_field("email")),
        };
        let selections = request
            .selections
            .ok_or_else(|| ApplicationError::missing_field("selections"))?;

        let quote = pricing::evaluate(&selections, &self.catalog);
        let reported_total = request.reported_total.unwrap_or(quote.total_price);
        let reported_monthly = request.reported_monthly.unwrap_or(quote.monthly_price);
        if reported_total != quote.total_price || reported_monthly != quote.monthly_price {
            // Display-only figures from the client; worth a log line
            // when they drift from the rule table, nothing more.
            tracing::debug!(
                reported_total,
                reported_monthly,
                computed_total = quote.total_price,
                computed_monthly = quote.monthly_price,
                "client-reported totals differ from computed quote"
            );
        }

        let message = request.message.unwrap_or_default();
        let record = SubmissionRecord::new(
            email.clone(),
            message.clone(),
            selections,
            &quote,
            request.price_estimate,
        );
        self.repository.save(&record).await?;
        tracing::info!(
            id = %record.id(),
            total = quote.total_price,
            monthly = quote.monthly_price,
            "submission persisted"
        );

        // Persistence is settled at this point; a notification failure
        // must not undo or fail the accepted submission.
        if let Some(notifier) = &self.notifier {
            let notice = SubmissionNotice {
                email,
                message,
                quote: quote.clone(),
            };
            if let Err(e) = notifier.notify(&notice).await {
                tracing::warn!(id = %record.id(), error = %e, "notification dispatch failed");
            }
        }

        Ok(SubmissionAccepted {
            id: *record.id(),
            total_price: quote.total_price,
            monthly_price: quote.monthly_price,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::notifications::error::{NotificationError, NotificationResult};
    use crate::infrastructure::persistence::traits::{
        RepositoryError, RepositoryResult, SubmissionRepository,
    };
    use crate::infrastructure::persistence::InMemorySubmissionRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// Repository stub whose writes always fail.
    #[derive(Debug, Default)]
    struct FailingRepository;

    #[async_trait]
    impl SubmissionRepository for FailingRepository {
        async fn save(&self, _record: &SubmissionRecord) -> RepositoryResult<()> {
            Err(RepositoryError::connection("store unreachable"))
        }

        async fn count(&self) -> RepositoryResult<u64> {
            Ok(0)
        }
    }

    /// Notifier stub recording every notice it is asked to send.
    #[derive(Debug, Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<SubmissionNotice>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, notice: &SubmissionNotice) -> NotificationResult<()> {
            self.notices.lock().await.push(notice.clone());
            Ok(())
        }
    }

    /// Notifier stub that always fails, counting attempts.
    #[derive(Debug, Default)]
    struct FailingNotifier {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _notice: &SubmissionNotice) -> NotificationResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(NotificationError::transport("smtp down"))
        }
    }

    fn valid_request() -> SubmissionRequest {
        SubmissionRequest {
            email: Some("client@example.com".to_string()),
            message: Some("call me".to_string()),
            selections: Some(
                Selections::new()
                    .with("type", "showcase")
                    .with_many("services", ["seo", "maintenance"]),
            ),
            ..SubmissionRequest::default()
        }
    }

    fn service_with(
        repository: Arc<dyn SubmissionRepository>,
        notifier: Option<Arc<dyn Notifier>>,
    ) -> SubmissionService {
        SubmissionService::new(Arc::new(RuleCatalog::standard()), repository, notifier)
    }

    #[tokio::test]
    async fn accepted_submission_returns_server_totals() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let service = service_with(repo.clone(), None);

        let accepted = service.submit(valid_request()).await.unwrap();

        assert_eq!(accepted.total_price, 10000);
        assert_eq!(accepted.monthly_price, 500);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn client_reported_totals_are_ignored_for_pricing() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let service = service_with(repo.clone(), None);

        let request = SubmissionRequest {
            reported_total: Some(1),
            reported_monthly: Some(1),
            price_estimate: Some("1 kr".to_string()),
            ..valid_request()
        };
        let accepted = service.submit(request).await.unwrap();

        assert_eq!(accepted.total_price, 10000);
        assert_eq!(accepted.monthly_price, 500);

        let records = repo.all().await;
        let record = records.first().unwrap();
        assert_eq!(record.total_price(), 10000);
        assert_eq!(record.price_estimate(), Some("1 kr"));
    }

    #[tokio::test]
    async fn missing_email_is_rejected_before_any_side_effect() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(repo.clone(), Some(notifier.clone()));

        let request = SubmissionRequest {
            email: None,
            ..valid_request()
        };
        let err = service.submit(request).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("email"));
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(notifier.notices.lock().await.is_empty());
    }

    #[tokio::test]
    async fn blank_email_is_rejected() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let service = service_with(repo.clone(), None);

        let request = SubmissionRequest {
            email: Some("   ".to_string()),
            ..valid_request()
        };
        assert!(service.submit(request).await.unwrap_err().is_validation());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn missing_selections_are_rejected() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let service = service_with(repo.clone(), None);

        let request = SubmissionRequest {
            selections: None,
            ..valid_request()
        };
        let err = service.submit(request).await.unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("selections"));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn persistence_failure_fails_the_call() {
        let service = service_with(Arc::new(FailingRepository), None);

        let err = service.submit(valid_request()).await.unwrap_err();
        assert!(err.is_repository());
    }

    #[tokio::test]
    async fn persistence_failure_skips_notification() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(Arc::new(FailingRepository), Some(notifier.clone()));

        let _ = service.submit(valid_request()).await.unwrap_err();
        assert!(notifier.notices.lock().await.is_empty());
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_the_submission() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let notifier = Arc::new(FailingNotifier::default());
        let service = service_with(repo.clone(), Some(notifier.clone()));

        let accepted = service.submit(valid_request()).await.unwrap();

        assert_eq!(accepted.total_price, 10000);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(notifier.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn notification_carries_totals_and_breakdown() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(repo, Some(notifier.clone()));

        service.submit(valid_request()).await.unwrap();

        let notices = notifier.notices.lock().await;
        let notice = notices.first().unwrap();
        assert_eq!(notice.email, "client@example.com");
        assert_eq!(notice.quote.total_price, 10000);
        assert_eq!(notice.quote.breakdown.len(), 3);
    }

    #[tokio::test]
    async fn empty_selections_map_is_accepted_with_zero_quote() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let service = service_with(repo.clone(), None);

        let request = SubmissionRequest {
            selections: Some(Selections::new()),
            ..valid_request()
        };
        let accepted = service.submit(request).await.unwrap();

        assert_eq!(accepted.total_price, 0);
        assert_eq!(accepted.monthly_price, 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
