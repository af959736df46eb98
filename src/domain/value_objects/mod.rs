//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! ## Identity Types
//!
//! - [`StepId`], [`OptionId`]: string-based wizard keys
//! - [`SubmissionId`]: UUID-based submission identifier
//!
//! ## Pricing Types
//!
//! - [`OptionRule`], [`StepRules`], [`RuleCatalog`]: the immutable
//!   pricing rule table
//! - [`Selections`], [`SelectionValue`]: the caller's choices
//! - [`QuoteResult`], [`BreakdownLine`]: the computed quote

pub mod catalog;
pub mod ids;
pub mod quote;
pub mod selections;

pub use catalog::{OptionRule, RuleCatalog, RuleCatalogBuilder, StepRules};
pub use ids::{OptionId, StepId, SubmissionId};
pub use quote::{BreakdownLine, QuoteResult};
pub use selections::{SelectionValue, Selections};
