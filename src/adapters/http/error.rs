//! Error responses shared by all HTTP adapters.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::alias::AliasError;

/// Standard error body: `{code, message}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Maps a registry error to its HTTP status and body.
pub fn handle_alias_error(error: AliasError) -> Response {
    let code = error.code().to_string();
    match error {
        AliasError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::new(code, message)
                    .with_details(serde_json::json!({ "field": field })),
            ),
        )
            .into_response(),
        AliasError::DuplicateKey(key) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(code, format!("Key already exists: {}", key))),
        )
            .into_response(),
        AliasError::NotFound(what) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(code, format!("Alias not found: {}", what))),
        )
            .into_response(),
        AliasError::PermissionDenied => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(code, "Permission denied")),
        )
            .into_response(),
        AliasError::EmailNotVerified => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new(
                code,
                "Verify your email address to manage links",
            )),
        )
            .into_response(),
        AliasError::UpstreamUnavailable(message) => {
            tracing::error!("Upstream unavailable: {}", message);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(code, "Service temporarily unavailable")),
            )
                .into_response()
        }
    }
}
