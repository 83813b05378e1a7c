//! Storage Adapters
//!
//! - **InMemoryAliasStore** - Stores aliases in process memory (no database configured, tests)
//!
//! The PostgreSQL implementation lives in `adapters::postgres`.

mod in_memory_alias_store;

pub use in_memory_alias_store::InMemoryAliasStore;
