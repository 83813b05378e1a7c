//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `VerificationSender` ports:
//!
//! - `mock` - Test implementations that don't require external services
//! - `oidc` - ID-token validation against an issuer's JWKS
//! - `identity_toolkit` - Verification emails through the Identity Toolkit REST API

mod identity_toolkit;
mod mock;
mod oidc;

pub use identity_toolkit::{IdentityToolkitConfig, IdentityToolkitSender};
pub use mock::{MockSessionValidator, MockVerificationSender};
pub use oidc::{OidcConfig, OidcSessionValidator};
