//! HTTP routes for account endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_me, send_verification_email, AccountHandlers};

/// Account routes; nest under `/api/me`.
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/", get(get_me))
        .route("/verification-email", post(send_verification_email))
        .with_state(handlers)
}
