//! Response builders shared by the API handlers.
//!
//! Failure bodies always carry a supportive `summary` placeholder; the real
//! error detail stays in the logs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::models::{ErrorBody, HealthStatus};

pub const SERVICE_MESSAGE: &str = "Gentle Story Summarizer is running!";

pub const INVALID_REQUEST_ERROR: &str = "Invalid request";
pub const INVALID_REQUEST_SUMMARY: &str = "Could you share a bit more? I'm here to listen.";

pub const PROCESSING_FAILED_ERROR: &str = "Processing failed";
pub const PROCESSING_FAILED_SUMMARY: &str =
    "I'm having trouble processing your text right now. Could you try again?";

#[must_use]
pub fn health() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        message: SERVICE_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// 400 returned for any missing, malformed or empty summarize request.
#[must_use]
pub fn invalid_request() -> Response {
    err_response(
        StatusCode::BAD_REQUEST,
        INVALID_REQUEST_ERROR,
        INVALID_REQUEST_SUMMARY,
    )
}

/// 500 returned when generation fails for any reason.
#[must_use]
pub fn processing_failed() -> Response {
    err_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        PROCESSING_FAILED_ERROR,
        PROCESSING_FAILED_SUMMARY,
    )
}

#[must_use]
pub fn err_response(status: StatusCode, error: &str, summary: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
            summary: summary.to_string(),
        }),
    )
        .into_response()
}
