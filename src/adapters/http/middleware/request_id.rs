//! Request correlation.
//!
//! The router assigns every request an `x-request-id` (or keeps the one the
//! client sent). Handlers copy it into `CommandMetadata` so handler logs can
//! be tied back to the request span.

use http::{HeaderMap, HeaderName};

use crate::domain::foundation::{AuthenticatedUser, CommandMetadata};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Builds handler metadata for an authenticated HTTP request.
pub fn command_metadata(user: &AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(user.id.clone()).with_source("http");
    match headers
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}
