//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, delete) are kept apart from query
//! handlers (list, search, resolve).

pub mod handlers;

pub use handlers::{
    // Alias handlers
    CreateAliasCommand, CreateAliasHandler, CreateAliasResult,
    DeleteAliasCommand, DeleteAliasHandler,
    ListAliasesHandler, ListAliasesQuery,
    ResolveAliasHandler,
    SearchAliasesHandler, SearchAliasesQuery,
    UpdateAliasCommand, UpdateAliasHandler, UpdateAliasResult,
    // Account handlers
    CallerProfile, DescribeCallerHandler,
    SendVerificationCommand, SendVerificationHandler, VerificationOutcome,
};
