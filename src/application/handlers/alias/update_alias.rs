//! UpdateAliasHandler - Command handler for retargeting an alias.

use std::sync::Arc;

use crate::domain::alias::{can_view, AliasError, AliasField, AliasKey, AliasRecord, Destination};
use crate::domain::foundation::{AdminPolicy, AliasId, AuthenticatedUser, CommandMetadata};
use crate::ports::AliasStore;

use super::require_verified;

/// Command to change the key and destination of an existing alias.
#[derive(Debug, Clone)]
pub struct UpdateAliasCommand {
    pub user: AuthenticatedUser,
    pub alias_id: AliasId,
    pub key: String,
    pub destination: String,
}

/// Result of successful alias update.
#[derive(Debug, Clone)]
pub struct UpdateAliasResult {
    pub alias: AliasRecord,
}

/// Handler for updating aliases.
pub struct UpdateAliasHandler {
    store: Arc<dyn AliasStore>,
    policy: Arc<AdminPolicy>,
}

impl UpdateAliasHandler {
    pub fn new(store: Arc<dyn AliasStore>, policy: Arc<AdminPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        cmd: UpdateAliasCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateAliasResult, AliasError> {
        let caller = self.policy.caller(cmd.user);
        require_verified(&caller)?;

        let key = AliasKey::new(cmd.key)?;
        let destination = Destination::new(cmd.destination)?;

        // 1. Load and authorize
        let mut alias = self
            .store
            .find_by_id(&cmd.alias_id)
            .await?
            .ok_or_else(|| AliasError::not_found(cmd.alias_id.to_string()))?;

        if !can_view(&caller, &alias) {
            tracing::warn!(
                alias_id = %cmd.alias_id,
                caller = %caller.email(),
                "Update denied: alias not visible to caller"
            );
            return Err(AliasError::PermissionDenied);
        }

        // 2. Uniqueness pre-check only when the key actually changes
        if &key != alias.key() {
            let holders = self.store.query_equals(AliasField::Key, key.as_str()).await?;
            if holders.iter().any(|holder| holder.id() != alias.id()) {
                return Err(AliasError::duplicate_key(key.as_str()));
            }
        }

        // 3. Apply and persist
        alias.retarget(key, destination);
        self.store.update(&alias).await?;

        tracing::info!(
            alias_id = %alias.id(),
            key = %alias.key(),
            correlation_id = %metadata.correlation_id(),
            source = metadata.source(),
            "Alias updated"
        );

        Ok(UpdateAliasResult { alias })
    }
}
