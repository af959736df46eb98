//! # Infrastructure Layer
//!
//! Adapters for external systems.
//!
//! - [`persistence`]: submission storage (PostgreSQL, in-memory)
//! - [`notifications`]: operator email (SMTP)

pub mod notifications;
pub mod persistence;
