//! # Application Layer
//!
//! Use cases and their error taxonomy.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{SubmissionAccepted, SubmissionRequest, SubmissionService};
