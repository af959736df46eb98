//! # Application Errors
//!
//! Error types for the submission pipeline.
//!
//! The taxonomy mirrors the failure semantics of a submission:
//! validation failures are caller errors surfaced before any side
//! effect, repository failures abort the call, and notification
//! failures never appear here at all — the orchestrator absorbs them.
//!
//! # Examples
//!
//! ```
//! use studio_quote::application::error::ApplicationError;
//!
//! let err = ApplicationError::missing_field("email");
//! assert!(err.is_validation());
//! ```

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed; no side effects were performed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The submission could not be persisted; it is not accepted.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a validation error for a missing required field.
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("missing required field: {field}"))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a repository error.
    #[must_use]
    pub fn is_repository(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = ApplicationError::missing_field("email");
        assert!(err.is_validation());
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn repository_error_converts() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert!(err.is_repository());
        assert!(!err.is_validation());
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn internal_error_display() {
        let err = ApplicationError::internal("unexpected");
        assert!(err.to_string().contains("internal"));
    }
}
