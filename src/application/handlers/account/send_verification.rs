//! SendVerificationHandler - Ask the identity provider for a verification email.

use std::sync::Arc;

use crate::domain::alias::AliasError;
use crate::domain::foundation::{AuthError, AuthenticatedUser, CommandMetadata};
use crate::ports::VerificationSender;

/// Command to send a verification email to the caller.
#[derive(Debug, Clone)]
pub struct SendVerificationCommand {
    pub user: AuthenticatedUser,
    /// The caller's own bearer credential.
    pub credential: String,
}

/// Outcome of a verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Sent,
    AlreadyVerified,
}

pub struct SendVerificationHandler {
    sender: Arc<dyn VerificationSender>,
}

impl SendVerificationHandler {
    pub fn new(sender: Arc<dyn VerificationSender>) -> Self {
        Self { sender }
    }

    pub async fn handle(
        &self,
        cmd: SendVerificationCommand,
        metadata: CommandMetadata,
    ) -> Result<VerificationOutcome, AliasError> {
        if cmd.user.email_verified {
            return Ok(VerificationOutcome::AlreadyVerified);
        }

        self.sender
            .send_verification_email(&cmd.credential, &cmd.user)
            .await
            .map_err(|err| {
                tracing::warn!(
                    email = %cmd.user.email,
                    error = %err,
                    "Verification email request failed"
                );
                match err {
                    AuthError::ServiceUnavailable(message) => AliasError::upstream(message),
                    other => AliasError::upstream(other.to_string()),
                }
            })?;

        tracing::info!(
            email = %cmd.user.email,
            correlation_id = %metadata.correlation_id(),
            "Verification email requested"
        );

        Ok(VerificationOutcome::Sent)
    }
}
