//! # Domain Services
//!
//! Pure computations over domain types.
//!
//! - [`pricing`]: quote evaluation against the rule catalog

pub mod pricing;
