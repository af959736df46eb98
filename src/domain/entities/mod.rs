//! # Domain Entities
//!
//! Entities with identity and lifecycle.
//!
//! - [`SubmissionRecord`]: an accepted, persisted quote request

pub mod submission;

pub use submission::SubmissionRecord;
