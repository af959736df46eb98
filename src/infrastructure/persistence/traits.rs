//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! Submissions are append-only: the port exposes a single write
//! operation and read-only counts. There is deliberately no update or
//! delete, matching the immutability of accepted submissions.
//!
//! # Examples
//!
//! ```ignore
//! use studio_quote::infrastructure::persistence::traits::SubmissionRepository;
//!
//! async fn record(repo: &impl SubmissionRepository, record: &SubmissionRecord) {
//!     repo.save(record).await.unwrap();
//! }
//! ```

use crate::domain::entities::SubmissionRecord;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Duplicate entity.
    #[error("duplicate submission: {id} already exists")]
    Duplicate {
        /// Submission identifier.
        id: String,
    },

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::Duplicate { id: id.into() }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for accepted submissions.
///
/// Implementations must treat records as append-only: a saved record is
/// never rewritten, and identifiers never collide under normal
/// operation (they are v4 UUIDs).
#[async_trait]
pub trait SubmissionRepository: Send + Sync + fmt::Debug {
    /// Appends a submission record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a record with the same
    /// id already exists, or a connection/query error if the store is
    /// unreachable or rejects the write.
    async fn save(&self, record: &SubmissionRecord) -> RepositoryResult<()>;

    /// Counts all stored submissions.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_error() {
        let err = RepositoryError::duplicate("abc-123");
        assert!(err.is_duplicate());
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn connection_error() {
        let err = RepositoryError::connection("connection refused");
        assert!(!err.is_duplicate());
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn query_error() {
        let err = RepositoryError::query("relation does not exist");
        assert!(err.to_string().contains("query error"));
    }

    #[test]
    fn serialization_error() {
        let err = RepositoryError::serialization("invalid JSON");
        assert!(err.to_string().contains("serialization"));
    }
}
