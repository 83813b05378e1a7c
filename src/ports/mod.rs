//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AliasStore` - Persistence and key-uniqueness arbitration for aliases
//! - `SessionValidator` - ID token validation at the HTTP boundary
//! - `VerificationSender` - Email-verification requests to the identity provider

mod alias_store;
mod session_validator;
mod verification_sender;

pub use alias_store::AliasStore;
pub use session_validator::SessionValidator;
pub use verification_sender::VerificationSender;
