//! # In-Memory Submission Repository
//!
//! In-memory implementation of [`SubmissionRepository`] for testing.
//!
//! This implementation uses a thread-safe `Vec` for storage, making it
//! suitable for unit tests without database dependencies.

use crate::domain::entities::SubmissionRecord;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, SubmissionRepository,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`SubmissionRepository`].
///
/// Stores records in insertion order behind a `tokio::sync::RwLock`.
/// Suitable for unit tests without database dependencies.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionRepository {
    storage: Arc<RwLock<Vec<SubmissionRecord>>>,
}

impl InMemorySubmissionRepository {
    /// Creates a new empty in-memory submission repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all stored records in insertion order.
    pub async fn all(&self) -> Vec<SubmissionRecord> {
        self.storage.read().await.clone()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all records from the repository.
    pub async fn clear(&self) {
        self.storage.write().await.clear();
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn save(&self, record: &SubmissionRecord) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if storage.iter().any(|r| r.id() == record.id()) {
            return Err(RepositoryError::duplicate(record.id().to_string()));
        }
        storage.push(record.clone());
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
