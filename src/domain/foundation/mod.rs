//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, identity types and error types that
//! form the vocabulary of the viewlink domain.

mod auth;
mod authorization;
mod command;
mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use authorization::{AdminPolicy, Caller};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AliasId, UserId};
pub use ownership::OwnedByEmail;
pub use timestamp::Timestamp;
