//! # studio-quote
//!
//! Server-side pricing engine and submission pipeline for the project
//! configurator quote form.
//!
//! The service computes an authoritative one-time and monthly price for
//! a user's step-by-step selections, persists accepted quotes, and
//! notifies an operator. Prices are always recomputed from the
//! server-held rule catalog; figures a client sends along are treated
//! as display text only.
//!
//! # Architecture
//!
//! - [`domain`]: the rule catalog, selections, quote types, and the
//!   pure pricing evaluator
//! - [`application`]: the submission orchestrator and error taxonomy
//! - [`infrastructure`]: PostgreSQL persistence and SMTP notification
//!   adapters behind ports
//! - [`api`]: the axum REST surface
//! - [`config`]: typed runtime configuration
//!
//! # Example
//!
//! ```
//! use studio_quote::domain::services::pricing;
//! use studio_quote::domain::value_objects::{RuleCatalog, Selections};
//!
//! let selections = Selections::new()
//!     .with("type", "ecommerce")
//!     .with_many("services", ["seo"]);
//! let quote = pricing::evaluate(&selections, &RuleCatalog::standard());
//! assert_eq!(quote.total_price, 12000);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
