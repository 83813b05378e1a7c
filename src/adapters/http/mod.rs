//! HTTP adapters - REST API and public redirect.
//!
//! Each area has its own module with DTOs, handlers and routes; `router`
//! assembles them with the auth middleware and tower-http layers.

pub mod account;
pub mod alias;
pub mod error;
pub mod middleware;
pub mod redirect;
pub mod router;

pub use error::{handle_alias_error, ErrorResponse};
pub use router::{build_router, AppServices, RouterOptions};
