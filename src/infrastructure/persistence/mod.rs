//! # Persistence Layer
//!
//! Submission storage port and implementations.
//!
//! ## Port
//!
//! - [`SubmissionRepository`]: append-only storage for accepted
//!   submissions
//!
//! ## Implementations
//!
//! - `postgres`: PostgreSQL via sqlx, selections stored as JSONB
//! - `in_memory`: thread-safe in-memory store for testing

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::InMemorySubmissionRepository;
pub use postgres::PostgresSubmissionRepository;
pub use traits::{RepositoryError, RepositoryResult, SubmissionRepository};
