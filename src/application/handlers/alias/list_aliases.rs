//! ListAliasesHandler - Query handler for the caller's visible aliases.

use std::sync::Arc;

use crate::domain::alias::{visible_to, AliasError, AliasField, AliasRecord};
use crate::domain::foundation::{AdminPolicy, AuthenticatedUser, Caller};
use crate::ports::AliasStore;

use super::require_verified;

/// Query for all aliases visible to a user.
#[derive(Debug, Clone)]
pub struct ListAliasesQuery {
    pub user: AuthenticatedUser,
}

/// Handler for listing aliases.
///
/// The administrator gets every record; everyone else gets their own.
pub struct ListAliasesHandler {
    store: Arc<dyn AliasStore>,
    policy: Arc<AdminPolicy>,
}

impl ListAliasesHandler {
    pub fn new(store: Arc<dyn AliasStore>, policy: Arc<AdminPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, query: ListAliasesQuery) -> Result<Vec<AliasRecord>, AliasError> {
        let caller = self.policy.caller(query.user);
        self.list_for(&caller).await
    }

    pub(crate) async fn list_for(&self, caller: &Caller) -> Result<Vec<AliasRecord>, AliasError> {
        require_verified(caller)?;

        let records = if caller.is_admin {
            self.store.all().await?
        } else {
            self.store
                .query_equals(AliasField::OwnerEmail, caller.email())
                .await?
        };

        Ok(visible_to(caller, records))
    }
}
