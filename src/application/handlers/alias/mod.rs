//! Alias command and query handlers.

mod create_alias;
mod delete_alias;
mod list_aliases;
mod resolve_alias;
mod search_aliases;
mod update_alias;

pub use create_alias::{CreateAliasCommand, CreateAliasHandler, CreateAliasResult};
pub use delete_alias::{DeleteAliasCommand, DeleteAliasHandler};
pub use list_aliases::{ListAliasesHandler, ListAliasesQuery};
pub use resolve_alias::ResolveAliasHandler;
pub use search_aliases::{SearchAliasesHandler, SearchAliasesQuery};
pub use update_alias::{UpdateAliasCommand, UpdateAliasHandler, UpdateAliasResult};

use crate::domain::alias::AliasError;
use crate::domain::foundation::Caller;

/// Every registry operation requires a verified email.
fn require_verified(caller: &Caller) -> Result<(), AliasError> {
    if caller.is_verified() {
        Ok(())
    } else {
        tracing::debug!(caller = %caller.email(), "Rejected unverified caller");
        Err(AliasError::EmailNotVerified)
    }
}
