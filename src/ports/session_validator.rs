//! Session validation port for ID tokens.
//!
//! This port defines the contract for validating the bearer credential sent
//! by the browser and extracting the caller's identity. It is
//! provider-agnostic: implementations exist for an OIDC/JWKS issuer and for
//! tests.
//!
//! # Security Requirements
//!
//! All implementations MUST validate:
//! - **Issuer (iss)**: Token must come from the expected identity provider
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates ID tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Validate issuer, audience, and expiry claims
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
/// - Report `email_verified` exactly as the provider asserts it
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
