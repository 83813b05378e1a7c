//! HTTP handlers for alias endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_alias_error, ErrorResponse};
use crate::adapters::http::middleware::{command_metadata, RequireAuth};
use crate::application::handlers::alias::{
    CreateAliasCommand, CreateAliasHandler, DeleteAliasCommand, DeleteAliasHandler,
    ListAliasesHandler, ListAliasesQuery, SearchAliasesHandler, SearchAliasesQuery,
    UpdateAliasCommand, UpdateAliasHandler,
};
use crate::domain::foundation::AliasId;

use super::dto::{AliasListResponse, AliasRequest, AliasResponse, ListAliasesParams};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AliasHandlers {
    create_handler: Arc<CreateAliasHandler>,
    update_handler: Arc<UpdateAliasHandler>,
    delete_handler: Arc<DeleteAliasHandler>,
    list_handler: Arc<ListAliasesHandler>,
    search_handler: Arc<SearchAliasesHandler>,
}

impl AliasHandlers {
    pub fn new(
        create_handler: Arc<CreateAliasHandler>,
        update_handler: Arc<UpdateAliasHandler>,
        delete_handler: Arc<DeleteAliasHandler>,
        list_handler: Arc<ListAliasesHandler>,
        search_handler: Arc<SearchAliasesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            list_handler,
            search_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/aliases - List visible aliases, or search them with `?q=&field=`
pub async fn list_aliases(
    State(handlers): State<AliasHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<ListAliasesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let result = match params.q {
        Some(term) => {
            handlers
                .search_handler
                .handle(SearchAliasesQuery {
                    user,
                    term,
                    field: params.field,
                })
                .await
        }
        None => handlers.list_handler.handle(ListAliasesQuery { user }).await,
    };

    match result {
        Ok(records) => {
            let response: AliasListResponse = records.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_alias_error(e),
    }
}

/// POST /api/aliases - Create an alias owned by the caller
pub async fn create_alias(
    State(handlers): State<AliasHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    body: Result<Json<AliasRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let metadata = command_metadata(&user, &headers);
    let cmd = CreateAliasCommand {
        user,
        key: req.key,
        destination: req.destination,
    };

    match handlers.create_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response: AliasResponse = result.alias.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_alias_error(e),
    }
}

/// PUT /api/aliases/:id - Change key and destination
pub async fn update_alias(
    State(handlers): State<AliasHandlers>,
    RequireAuth(user): RequireAuth,
    Path(alias_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<AliasRequest>, JsonRejection>,
) -> Response {
    let alias_id = match alias_id.parse::<AliasId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid alias ID"),
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let metadata = command_metadata(&user, &headers);
    let cmd = UpdateAliasCommand {
        user,
        alias_id,
        key: req.key,
        destination: req.destination,
    };

    match handlers.update_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response: AliasResponse = result.alias.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_alias_error(e),
    }
}

/// DELETE /api/aliases/:id - Remove an alias
pub async fn delete_alias(
    State(handlers): State<AliasHandlers>,
    RequireAuth(user): RequireAuth,
    Path(alias_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let alias_id = match alias_id.parse::<AliasId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid alias ID"),
    };

    let metadata = command_metadata(&user, &headers);
    let cmd = DeleteAliasCommand { user, alias_id };

    match handlers.delete_handler.handle(cmd, metadata).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_alias_error(e),
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}
