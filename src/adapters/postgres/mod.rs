//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresAliasStore` - Alias persistence with key uniqueness enforced by a unique index

mod alias_store;

pub use alias_store::PostgresAliasStore;
