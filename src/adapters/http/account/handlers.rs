//! HTTP handlers for account endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::adapters::http::error::handle_alias_error;
use crate::adapters::http::middleware::{
    command_metadata, AuthRejection, BearerCredential, RequireAuth,
};
use crate::application::handlers::account::{
    DescribeCallerHandler, SendVerificationCommand, SendVerificationHandler, VerificationOutcome,
};

use super::dto::{CallerProfileResponse, VerificationResponse};

#[derive(Clone)]
pub struct AccountHandlers {
    describe_handler: Arc<DescribeCallerHandler>,
    verification_handler: Arc<SendVerificationHandler>,
}

impl AccountHandlers {
    pub fn new(
        describe_handler: Arc<DescribeCallerHandler>,
        verification_handler: Arc<SendVerificationHandler>,
    ) -> Self {
        Self {
            describe_handler,
            verification_handler,
        }
    }
}

/// GET /api/me - Describe the signed-in caller
pub async fn get_me(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let profile = handlers.describe_handler.handle(user);
    (StatusCode::OK, Json(CallerProfileResponse::from(profile))).into_response()
}

/// POST /api/me/verification-email - Ask the identity provider to send a verification email
pub async fn send_verification_email(
    State(handlers): State<AccountHandlers>,
    RequireAuth(user): RequireAuth,
    credential: Option<Extension<BearerCredential>>,
    headers: HeaderMap,
) -> Response {
    let Some(Extension(BearerCredential(credential))) = credential else {
        return AuthRejection::Unauthenticated.into_response();
    };

    let metadata = command_metadata(&user, &headers);
    let cmd = SendVerificationCommand { user, credential };

    match handlers.verification_handler.handle(cmd, metadata).await {
        Ok(outcome) => {
            let status = match outcome {
                VerificationOutcome::Sent => StatusCode::ACCEPTED,
                VerificationOutcome::AlreadyVerified => StatusCode::OK,
            };
            (status, Json(VerificationResponse::from(outcome))).into_response()
        }
        Err(e) => handle_alias_error(e),
    }
}
