//! # REST Routes
//!
//! Router assembly for the quote form API.
//!
//! The form is served from a separate origin, so CORS is permissive,
//! matching the public nature of the endpoint. Request tracing comes
//! from tower-http.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// # Routes
///
/// - `POST /submit` — quote form submission
/// - `GET /health` — liveness probe
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/submit", post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
