//! DeleteAliasHandler - Command handler for removing an alias.

use std::sync::Arc;

use crate::domain::alias::{can_view, AliasError};
use crate::domain::foundation::{AdminPolicy, AliasId, AuthenticatedUser, CommandMetadata};
use crate::ports::AliasStore;

use super::require_verified;

/// Command to delete an alias.
#[derive(Debug, Clone)]
pub struct DeleteAliasCommand {
    pub user: AuthenticatedUser,
    pub alias_id: AliasId,
}

/// Handler for deleting aliases.
///
/// Visibility is re-checked against the stored record; holding an id is not
/// enough to delete it.
pub struct DeleteAliasHandler {
    store: Arc<dyn AliasStore>,
    policy: Arc<AdminPolicy>,
}

impl DeleteAliasHandler {
    pub fn new(store: Arc<dyn AliasStore>, policy: Arc<AdminPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        cmd: DeleteAliasCommand,
        metadata: CommandMetadata,
    ) -> Result<(), AliasError> {
        let caller = self.policy.caller(cmd.user);
        require_verified(&caller)?;

        let alias = self
            .store
            .find_by_id(&cmd.alias_id)
            .await?
            .ok_or_else(|| AliasError::not_found(cmd.alias_id.to_string()))?;

        if !can_view(&caller, &alias) {
            tracing::warn!(
                alias_id = %cmd.alias_id,
                caller = %caller.email(),
                "Delete denied: alias not visible to caller"
            );
            return Err(AliasError::PermissionDenied);
        }

        self.store.delete(&cmd.alias_id).await?;

        tracing::info!(
            alias_id = %cmd.alias_id,
            key = %alias.key(),
            correlation_id = %metadata.correlation_id(),
            source = metadata.source(),
            "Alias deleted"
        );

        Ok(())
    }
}
