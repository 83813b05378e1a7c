//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Authentication middleware and extractors
//! - `request_id` - Request correlation for handler logs

pub mod auth;
pub mod request_id;

pub use auth::{
    auth_middleware, AuthRejection, AuthState, BearerCredential, RequireAuth,
};
pub use request_id::{command_metadata, REQUEST_ID_HEADER};
