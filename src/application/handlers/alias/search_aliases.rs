//! SearchAliasesHandler - Query handler for substring search over visible aliases.

use std::sync::Arc;

use crate::domain::alias::{search, AliasError, AliasField, AliasRecord};
use crate::domain::foundation::{AdminPolicy, AuthenticatedUser};
use crate::ports::AliasStore;

use super::ListAliasesHandler;

/// Search query.
#[derive(Debug, Clone)]
pub struct SearchAliasesQuery {
    pub user: AuthenticatedUser,
    pub term: String,
    pub field: AliasField,
}

/// Handler for searching aliases: list, then filter.
pub struct SearchAliasesHandler {
    list: ListAliasesHandler,
    policy: Arc<AdminPolicy>,
}

impl SearchAliasesHandler {
    pub fn new(store: Arc<dyn AliasStore>, policy: Arc<AdminPolicy>) -> Self {
        Self {
            list: ListAliasesHandler::new(store, policy.clone()),
            policy,
        }
    }

    pub async fn handle(&self, query: SearchAliasesQuery) -> Result<Vec<AliasRecord>, AliasError> {
        let caller = self.policy.caller(query.user);
        let visible = self.list.list_for(&caller).await?;

        if query.field.is_owner_field() && !caller.is_admin {
            tracing::debug!(
                caller = %caller.email(),
                field = query.field.as_str(),
                "Owner-field search by non-admin returns nothing"
            );
        }

        Ok(search(&visible, &query.term, query.field, &caller))
    }
}
