//! HTTP adapter for the caller's own account.

mod dto;
mod handlers;
mod routes;

pub use dto::{CallerProfileResponse, VerificationResponse};
pub use handlers::AccountHandlers;
pub use routes::account_routes;
