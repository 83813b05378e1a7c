//! HTTP routes for alias endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{create_alias, delete_alias, list_aliases, update_alias, AliasHandlers};

/// Creates the alias router; nest it under `/api/aliases`.
pub fn alias_routes(handlers: AliasHandlers) -> Router {
    Router::new()
        .route("/", get(list_aliases).post(create_alias))
        .route("/:id", put(update_alias).delete(delete_alias))
        .with_state(handlers)
}
