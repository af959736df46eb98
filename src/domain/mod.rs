//! # Domain Layer
//!
//! Pure business types and logic for quote evaluation.
//!
//! No I/O happens here: the catalog is immutable data, the pricing
//! service is a pure function, and the submission entity is a plain
//! record. Everything effectful lives in the application and
//! infrastructure layers.

pub mod entities;
pub mod services;
pub mod value_objects;
