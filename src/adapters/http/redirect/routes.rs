//! HTTP routes for public key resolution.

use axum::{routing::get, Router};

use super::handlers::{redirect, resolve, RedirectHandlers};

/// `GET /:key`, mounted at the root.
pub fn redirect_routes(handlers: RedirectHandlers) -> Router {
    Router::new()
        .route("/:key", get(redirect))
        .with_state(handlers)
}

/// `GET /:key` as JSON; nest under `/api/resolve`.
pub fn resolve_routes(handlers: RedirectHandlers) -> Router {
    Router::new()
        .route("/:key", get(resolve))
        .with_state(handlers)
}
