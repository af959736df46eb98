//! # PostgreSQL Submission Repository
//!
//! PostgreSQL implementation of [`SubmissionRepository`] using sqlx.
//!
//! Selections are stored as JSONB with their submitted shape preserved,
//! so a record can be inspected later exactly as the client sent it.
//! The table is append-only; this implementation issues inserts and
//! counts, nothing else.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE quote_submissions (
//!     id              UUID PRIMARY KEY,
//!     email           TEXT NOT NULL,
//!     message         TEXT NOT NULL DEFAULT '',
//!     selections      JSONB NOT NULL,
//!     total_price     BIGINT NOT NULL DEFAULT 0,
//!     monthly_price   BIGINT NOT NULL DEFAULT 0,
//!     price_estimate  TEXT,
//!     created_at      TIMESTAMPTZ NOT NULL
//! );
//! ```

use crate::domain::entities::SubmissionRecord;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, SubmissionRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// PostgreSQL implementation of [`SubmissionRepository`].
///
/// Uses connection pooling via `sqlx::PgPool` and JSONB for the
/// selections payload.
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use studio_quote::infrastructure::persistence::postgres::PostgresSubmissionRepository;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let repo = PostgresSubmissionRepository::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    /// Creates a new PostgreSQL submission repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn save(&self, record: &SubmissionRecord) -> RepositoryResult<()> {
        let selections = serde_json::to_value(record.selections())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let total_price = i64::try_from(record.total_price())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let monthly_price = i64::try_from(record.monthly_price())
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO quote_submissions (
                id, email, message, selections,
                total_price, monthly_price, price_estimate, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(record.email())
        .bind(record.message())
        .bind(&selections)
        .bind(total_price)
        .bind(monthly_price)
        .bind(record.price_estimate())
        .bind(record.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::duplicate(record.id().to_string())
            }
            _ => RepositoryError::query(e.to_string()),
        })?;

        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quote_submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(count.unsigned_abs())
    }
}
