//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, identity, admin policy, errors)
//! - `alias` - Alias records, uniqueness-relevant value objects and visibility rules

pub mod alias;
pub mod foundation;
