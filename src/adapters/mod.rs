//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - OIDC token validation and verification email delivery
//! - `http` - axum routes for the registry, account and redirect
//! - `postgres` - PostgreSQL alias store
//! - `storage` - In-memory alias store

pub mod auth;
pub mod http;
pub mod postgres;
pub mod storage;

pub use auth::{
    IdentityToolkitConfig, IdentityToolkitSender, MockSessionValidator, MockVerificationSender,
    OidcConfig, OidcSessionValidator,
};
pub use http::{build_router, AppServices, RouterOptions};
pub use postgres::PostgresAliasStore;
pub use storage::InMemoryAliasStore;
