//! HTTP adapter for alias management endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AliasListResponse, AliasRequest, AliasResponse, ListAliasesParams};
pub use handlers::AliasHandlers;
pub use routes::alias_routes;
