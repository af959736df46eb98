//! # REST Handlers
//!
//! Request handlers and wire DTOs for the quote form API.
//!
//! The wire format is camelCase JSON matching the frontend form. A
//! request may carry client-computed totals; they are passed through to
//! the service as display-only values and never influence the figures
//! returned, which always come from the server-side evaluation.

use crate::application::error::ApplicationError;
use crate::application::services::{SubmissionRequest, SubmissionService};
use crate::domain::value_objects::Selections;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The submission pipeline.
    pub submissions: SubmissionService,
}

/// Wire format of a quote form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Requester's email address (required).
    pub email: Option<String>,
    /// Free-form message.
    pub message: Option<String>,
    /// Wizard selections (required).
    pub selections: Option<Selections>,
    /// Client-computed one-time total; display-only.
    pub total_price: Option<u64>,
    /// Client-computed monthly total; display-only.
    pub monthly_price: Option<u64>,
    /// Client-rendered price text; display-only.
    pub price_estimate: Option<String>,
}

impl From<SubmitRequest> for SubmissionRequest {
    fn from(request: SubmitRequest) -> Self {
        Self {
            email: request.email,
            message: request.message,
            selections: request.selections,
            reported_total: request.total_price,
            reported_monthly: request.monthly_price,
            price_estimate: request.price_estimate,
        }
    }
}

/// Wire format of a successful submission response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Human-readable acknowledgement.
    pub message: String,
    /// Server-computed one-time total.
    pub total_price: u64,
    /// Server-computed monthly total.
    pub monthly_price: u64,
}

/// Wire format of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error description safe to show a caller.
    pub error: String,
}

/// Wire format of the health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
}

/// Error wrapper mapping application errors onto HTTP responses.
///
/// Validation errors surface their message with a 400. Everything else
/// collapses to a generic 500 so storage details never leak.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            ApplicationError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApplicationError::Repository(e) => {
                tracing::error!(error = %e, "submission persistence failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
            ApplicationError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// `POST /submit` — accepts a quote form submission.
///
/// # Errors
///
/// Returns 400 when a required field is missing and 500 when the
/// submission cannot be persisted.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let accepted = state.submissions.submit(request.into()).await?;
    Ok(Json(SubmitResponse {
        success: true,
        message: "Submission saved".to_string(),
        total_price: accepted.total_price,
        monthly_price: accepted.monthly_price,
    }))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
