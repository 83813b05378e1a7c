//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod alias;

pub use account::{
    CallerProfile, DescribeCallerHandler, SendVerificationCommand, SendVerificationHandler,
    VerificationOutcome,
};
pub use alias::{
    CreateAliasCommand, CreateAliasHandler, CreateAliasResult, DeleteAliasCommand,
    DeleteAliasHandler, ListAliasesHandler, ListAliasesQuery, ResolveAliasHandler,
    SearchAliasesHandler, SearchAliasesQuery, UpdateAliasCommand, UpdateAliasHandler,
    UpdateAliasResult,
};
