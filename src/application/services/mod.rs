//! # Application Services
//!
//! Use case orchestration.
//!
//! - [`submission`]: the validate → price → persist → notify pipeline

pub mod submission;

pub use submission::{SubmissionAccepted, SubmissionRequest, SubmissionService};
