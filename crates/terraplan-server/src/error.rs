//! Error types for the blueprint API server.
//!
//! [`ApiError`] unifies all request failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! JSON shapes mirror what clients already parse: a top-level `error`
//! string plus mode-specific detail fields.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur while serving a blueprint request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was missing, malformed, or out of range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The ethical guardrail rejected the request.
    #[error("request rejected: {0}")]
    GuardrailRejected(String),

    /// Every environmental data source failed.
    #[error("all data sources unavailable")]
    UpstreamUnavailable {
        /// Per-source failure descriptions.
        failed_sources: Vec<String>,
    },

    /// Blueprint generation failed internally.
    #[error("engine error: {0}")]
    Engine(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
            Self::GuardrailRejected(reason) => (
                StatusCode::FORBIDDEN,
                serde_json::json!({
                    "error": "Request rejected by ethical guardrails",
                    "reason": reason,
                }),
            ),
            Self::UpstreamUnavailable { failed_sources } => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({
                    "error": "All environmental data sources are currently unavailable.",
                    "failed_sources": failed_sources,
                }),
            ),
            Self::Engine(message) => {
                tracing::error!(error = %message, "blueprint generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "Internal server error during blueprint generation",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
