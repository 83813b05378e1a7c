//! Mock authentication adapters for testing and local development.
//!
//! These adapters implement the `SessionValidator` and `VerificationSender`
//! ports without a real identity provider.
//!
//! # Example
//!
//! ```ignore
//! use viewlink::adapters::auth::MockSessionValidator;
//! use viewlink::domain::foundation::{AuthenticatedUser, UserId};
//!
//! let validator = MockSessionValidator::new()
//!     .with_user("valid-token", AuthenticatedUser::new(
//!         UserId::new("user-123").unwrap(),
//!         "test@example.com",
//!         Some("Test User".to_string()),
//!         true,
//!     ));
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{SessionValidator, VerificationSender};

/// Mock session validator.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Error returned for every validation while set.
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
        self
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Mock verification sender that records requests instead of sending mail.
#[derive(Debug, Default)]
pub struct MockVerificationSender {
    sent: RwLock<Vec<String>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockVerificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Emails for which a verification message was requested, in order.
    pub fn sent_to(&self) -> Vec<String> {
        self.sent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl VerificationSender for MockVerificationSender {
    async fn send_verification_email(
        &self,
        _credential: &str,
        user: &AuthenticatedUser,
    ) -> Result<(), AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        tracing::debug!(email = %user.email, "Mock verification email recorded");
        self.sent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user.email.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            "test@example.com",
            Some("Test User".to_string()),
            true,
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // MockSessionValidator Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn mock_validator_returns_user_for_registered_token() {
        let validator = MockSessionValidator::new().with_user("valid-token", test_user());

        let user = validator.validate("valid-token").await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn mock_validator_returns_invalid_token_for_unknown() {
        let validator = MockSessionValidator::new();

        let result = validator.validate("unknown-token").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn mock_validator_with_error_forces_error() {
        let validator = MockSessionValidator::new()
            .with_user("valid-token", test_user())
            .with_error(AuthError::service_unavailable("Test error"));

        let result = validator.validate("valid-token").await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // MockVerificationSender Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn mock_sender_records_requests() {
        let sender = MockVerificationSender::new();

        sender
            .send_verification_email("tok", &test_user())
            .await
            .unwrap();

        assert_eq!(sender.sent_to(), vec!["test@example.com".to_string()]);
    }

    #[tokio::test]
    async fn mock_sender_with_error_records_nothing() {
        let sender = MockVerificationSender::new().with_error(AuthError::service_unavailable("down"));

        let result = sender.send_verification_email("tok", &test_user()).await;

        assert!(result.is_err());
        assert!(sender.sent_to().is_empty());
    }
}
