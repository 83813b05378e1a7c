//! Application router: wires handlers, auth and tower-http layers together.
//!
//! ```text
//! /health                         plain "ok"
//! /api/aliases, /api/aliases/:id  registry (auth middleware)
//! /api/me, /api/me/...            account (auth middleware)
//! /api/resolve/:key               JSON resolution (public)
//! /:key                           public redirect
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    CreateAliasHandler, DeleteAliasHandler, DescribeCallerHandler, ListAliasesHandler,
    ResolveAliasHandler, SearchAliasesHandler, SendVerificationHandler, UpdateAliasHandler,
};
use crate::domain::foundation::AdminPolicy;
use crate::ports::{AliasStore, SessionValidator, VerificationSender};

use super::account::{account_routes, AccountHandlers};
use super::alias::{alias_routes, AliasHandlers};
use super::middleware::{auth_middleware, REQUEST_ID_HEADER};
use super::redirect::{redirect_routes, resolve_routes, RedirectHandlers};

/// Ports the router depends on.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn AliasStore>,
    pub validator: Arc<dyn SessionValidator>,
    pub sender: Arc<dyn VerificationSender>,
    pub policy: Arc<AdminPolicy>,
}

/// Transport settings for the router.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub request_timeout: Duration,
    /// Allowed CORS origins. `*` allows any origin; empty allows none.
    pub cors_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the complete application router.
pub fn build_router(services: AppServices, options: RouterOptions) -> Router {
    let AppServices {
        store,
        validator,
        sender,
        policy,
    } = services;

    let alias_handlers = AliasHandlers::new(
        Arc::new(CreateAliasHandler::new(store.clone(), policy.clone())),
        Arc::new(UpdateAliasHandler::new(store.clone(), policy.clone())),
        Arc::new(DeleteAliasHandler::new(store.clone(), policy.clone())),
        Arc::new(ListAliasesHandler::new(store.clone(), policy.clone())),
        Arc::new(SearchAliasesHandler::new(store.clone(), policy.clone())),
    );
    let account_handlers = AccountHandlers::new(
        Arc::new(DescribeCallerHandler::new(policy)),
        Arc::new(SendVerificationHandler::new(sender)),
    );
    let redirect_handlers = RedirectHandlers::new(Arc::new(ResolveAliasHandler::new(store)));

    let api = Router::new()
        .nest("/aliases", alias_routes(alias_handlers))
        .nest("/me", account_routes(account_handlers))
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .nest("/api/resolve", resolve_routes(redirect_handlers.clone()))
        .merge(redirect_routes(redirect_handlers))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
                .layer(TimeoutLayer::new(options.request_timeout))
                .layer(cors_layer(&options.cors_origins)),
        )
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::{MockSessionValidator, MockVerificationSender};
    use crate::adapters::storage::InMemoryAliasStore;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(
            AppServices {
                store: Arc::new(InMemoryAliasStore::new()),
                validator: Arc::new(MockSessionValidator::new()),
                sender: Arc::new(MockVerificationSender::new()),
                policy: Arc::new(AdminPolicy::without_admin()),
            },
            RouterOptions::default(),
        )
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key(&REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let response = test_router()
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "req-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[&REQUEST_ID_HEADER], "req-42");
    }

    #[tokio::test]
    async fn api_requires_authentication() {
        let response = test_router()
            .oneshot(Request::get("/api/aliases").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn resolve_ignores_authorization_header() {
        let response = test_router()
            .oneshot(
                Request::get("/api/resolve/nothing-here")
                    .header(header::AUTHORIZATION, "Bearer expired")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_key_serves_not_found_page() {
        let response = test_router()
            .oneshot(Request::get("/nothing-here").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Link not found"));
    }

    #[test]
    fn wildcard_origin_builds_permissive_cors() {
        let _ = cors_layer(&["*".to_string()]);
        let _ = cors_layer(&["https://app.example.com".to_string(), "bad\norigin".to_string()]);
    }
}
