//! HTTP adapter for the public redirect boundary.

mod dto;
mod handlers;
mod routes;

pub use dto::ResolvedAliasResponse;
pub use handlers::{RedirectHandlers, NOT_FOUND_PAGE};
pub use routes::{redirect_routes, resolve_routes};
