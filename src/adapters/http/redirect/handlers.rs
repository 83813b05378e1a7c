//! HTTP handlers for public key resolution.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_alias_error, ErrorResponse};
use crate::application::handlers::alias::ResolveAliasHandler;
use crate::domain::alias::AliasError;

use super::dto::ResolvedAliasResponse;

/// Static page served when a key does not resolve.
pub const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Link not found</title></head><body><h1>Link not found</h1></body></html>\n";

#[derive(Clone)]
pub struct RedirectHandlers {
    resolve_handler: Arc<ResolveAliasHandler>,
}

impl RedirectHandlers {
    pub fn new(resolve_handler: Arc<ResolveAliasHandler>) -> Self {
        Self { resolve_handler }
    }
}

/// GET /:key - Redirect to the destination, or serve the "Link not found" page
pub async fn redirect(
    State(handlers): State<RedirectHandlers>,
    Path(key): Path<String>,
) -> Response {
    match handlers.resolve_handler.handle(&key).await {
        Ok(destination) => match HeaderValue::from_str(destination.as_str()) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(_) => {
                tracing::warn!(key = %key, "Destination is not a valid Location header value");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorResponse::new(
                        "INVALID_DESTINATION",
                        "Link destination cannot be used for a redirect",
                    )),
                )
                    .into_response()
            }
        },
        Err(AliasError::NotFound(_)) => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
        Err(e) => handle_alias_error(e),
    }
}

/// GET /api/resolve/:key - Resolve as JSON, for clients that navigate themselves
pub async fn resolve(
    State(handlers): State<RedirectHandlers>,
    Path(key): Path<String>,
) -> Response {
    match handlers.resolve_handler.handle(&key).await {
        Ok(destination) => (
            StatusCode::OK,
            Json(ResolvedAliasResponse {
                key,
                destination: destination.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_alias_error(e),
    }
}
