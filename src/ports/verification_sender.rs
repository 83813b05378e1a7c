//! Port for asking the identity provider to send an email-verification
//! message to the signed-in user.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

#[async_trait]
pub trait VerificationSender: Send + Sync {
    /// Requests a verification email for `user`.
    ///
    /// `credential` is the caller's own ID token; the provider uses it to
    /// identify the account.
    async fn send_verification_email(
        &self,
        credential: &str,
        user: &AuthenticatedUser,
    ) -> Result<(), AuthError>;
}
