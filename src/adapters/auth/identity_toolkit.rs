//! Identity Toolkit adapter for verification emails.
//!
//! Implements `VerificationSender` against the Google Identity Toolkit REST
//! API (`accounts:sendOobCode`), the backend behind Firebase Authentication.
//! The caller's own ID token identifies the account; the project API key
//! authorizes the request.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::VerificationSender;

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Identity Toolkit configuration.
#[derive(Clone)]
pub struct IdentityToolkitConfig {
    api_key: SecretString,
    base_url: String,
}

impl IdentityToolkitConfig {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn send_oob_code_url(&self) -> String {
        format!(
            "{}/v1/accounts:sendOobCode",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOobCodeRequest<'a> {
    request_type: &'static str,
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Maps an Identity Toolkit error message to an auth error.
fn map_error_message(message: &str) -> AuthError {
    match message {
        "INVALID_ID_TOKEN" | "USER_NOT_FOUND" => AuthError::InvalidToken,
        "TOKEN_EXPIRED" | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => AuthError::TokenExpired,
        other => AuthError::service_unavailable(format!("Identity Toolkit error: {}", other)),
    }
}

/// Production implementation of `VerificationSender`.
pub struct IdentityToolkitSender {
    config: IdentityToolkitConfig,
    http_client: reqwest::Client,
}

impl IdentityToolkitSender {
    pub fn new(config: IdentityToolkitConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl VerificationSender for IdentityToolkitSender {
    async fn send_verification_email(
        &self,
        credential: &str,
        user: &AuthenticatedUser,
    ) -> Result<(), AuthError> {
        let response = self
            .http_client
            .post(self.config.send_oob_code_url())
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .json(&SendOobCodeRequest {
                request_type: "VERIFY_EMAIL",
                id_token: credential,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity Toolkit request failed: {}", e);
                AuthError::service_unavailable(format!("Identity Toolkit unreachable: {}", e))
            })?;

        if response.status().is_success() {
            tracing::debug!(email = %user.email, "Verification email sent");
            return Ok(());
        }

        let status = response.status();
        let message = response
            .json::<ErrorEnvelope>()
            .await
            .map(|envelope| envelope.error.message)
            .unwrap_or_default();

        tracing::warn!(%status, message = %message, "Identity Toolkit rejected verification request");

        if message.is_empty() {
            return Err(AuthError::service_unavailable(format!(
                "Identity Toolkit returned {}",
                status
            )));
        }
        Err(map_error_message(&message))
    }
}

impl std::fmt::Debug for IdentityToolkitSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityToolkitSender")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_send_oob_code_url() {
        let config = IdentityToolkitConfig::new(SecretString::new("k".to_string()))
            .with_base_url("http://localhost:9099/");

        assert_eq!(
            config.send_oob_code_url(),
            "http://localhost:9099/v1/accounts:sendOobCode"
        );
    }

    #[test]
    fn request_body_uses_camel_case() {
        let body = serde_json::to_value(SendOobCodeRequest {
            request_type: "VERIFY_EMAIL",
            id_token: "tok",
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"requestType": "VERIFY_EMAIL", "idToken": "tok"})
        );
    }

    #[test]
    fn token_errors_map_to_auth_errors() {
        assert_eq!(map_error_message("INVALID_ID_TOKEN"), AuthError::InvalidToken);
        assert_eq!(map_error_message("TOKEN_EXPIRED"), AuthError::TokenExpired);
        assert!(matches!(
            map_error_message("TOO_MANY_ATTEMPTS_TRY_LATER"),
            AuthError::ServiceUnavailable(_)
        ));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let sender = IdentityToolkitSender::new(IdentityToolkitConfig::new(SecretString::new(
            "super-secret".to_string(),
        )))
        .unwrap();

        assert!(!format!("{:?}", sender).contains("super-secret"));
    }
}
