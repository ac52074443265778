//! Maps domain `AppError` and gate denials to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use actlog_auth::DenyReason;
use actlog_core::error::{AppError, ErrorKind};

use crate::views;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Stable denial reason, present only on access denials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable message.
    pub message: String,
}

/// Status, code, and client-facing message for an error kind.
///
/// Storage and internal failures never echo their message to the client.
fn classify(err: &AppError) -> (StatusCode, &'static str, String) {
    match err.kind {
        ErrorKind::Validation => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            err.message.clone(),
        ),
        ErrorKind::Authentication => (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            err.message.clone(),
        ),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", err.message.clone()),
        ErrorKind::Storage => {
            tracing::error!(error = %err, "Log store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "The activity log is temporarily unavailable".to_string(),
            )
        }
        ErrorKind::Configuration | ErrorKind::Serialization | ErrorKind::Internal => {
            tracing::error!(error = %err, "Internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// JSON error response for the `/api` routes.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = classify(&self.0);
        let body = ApiErrorResponse {
            error: code.to_string(),
            reason: None,
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// JSON body for a denied `/api` request.
#[derive(Debug, Clone, Copy)]
pub struct ApiDenied(pub DenyReason);

impl IntoResponse for ApiDenied {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: "ACCESS_DENIED".to_string(),
            reason: Some(self.0.code().to_string()),
            message: views::ACCESS_DENIED.to_string(),
        };
        (StatusCode::FORBIDDEN, Json(body)).into_response()
    }
}

/// HTML error page for the admin routes.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ApiError> for HtmlError {
    fn from(err: ApiError) -> Self {
        Self(err.0)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let (status, _, message) = classify(&self.0);
        views::error_page(status, &message)
    }
}

/// HTML page for a denied admin request.
#[derive(Debug, Clone, Copy)]
pub struct HtmlDenied(pub DenyReason);

impl IntoResponse for HtmlDenied {
    fn into_response(self) -> Response {
        views::access_denied_page(self.0)
    }
}
