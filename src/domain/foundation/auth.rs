//! Authentication types for the domain layer.
//!
//! These types represent an identity extracted from a validated ID token.
//! They have **no external dependencies**: any identity provider can populate
//! them via the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated ID token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Display name if available (may come from `name` or `preferred_username` claim).
    pub display_name: Option<String>,

    /// Whether the identity provider has verified the email address.
    pub email_verified: bool,
}

impl AuthenticatedUser {
    pub fn new(
        id: UserId,
        email: impl Into<String>,
        display_name: Option<String>,
        email_verified: bool,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            display_name,
            email_verified,
        }
    }

    /// The name recorded as an alias owner's display name.
    ///
    /// Providers often send an empty or whitespace `name` claim; those fall
    /// back to the email like a missing one.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Authentication errors reported by the identity gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The identity provider is unreachable or refused the request.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn display_name_or_email_returns_name_when_present() {
        let user = AuthenticatedUser::new(
            test_user_id(),
            "test@example.com",
            Some("Alice".to_string()),
            true,
        );

        assert_eq!(user.display_name_or_email(), "Alice");
    }

    #[test]
    fn display_name_or_email_returns_email_when_no_name() {
        let user = AuthenticatedUser::new(test_user_id(), "bob@example.com", None, true);

        assert_eq!(user.display_name_or_email(), "bob@example.com");
    }

    #[test]
    fn blank_display_name_falls_back_to_email() {
        let user = AuthenticatedUser::new(test_user_id(), "eve@example.com", Some("  ".to_string()), true);

        assert_eq!(user.display_name_or_email(), "eve@example.com");
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(format!("{}", err), "Auth service unavailable: Connection refused");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("").requires_reauthentication());
    }
}
