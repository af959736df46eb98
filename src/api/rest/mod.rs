//! # REST API
//!
//! HTTP endpoints for the quote form, built with axum.
//!
//! # Endpoints
//!
//! - `POST /submit` — accept a quote form submission
//! - `GET /health` — liveness probe
//!
//! # Usage
//!
//! ```ignore
//! use studio_quote::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState { submissions: service });
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, HealthResponse, SubmitRequest, SubmitResponse,
};
pub use routes::create_router;
