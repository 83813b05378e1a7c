//! ResolveAliasHandler - Public key-to-destination lookup.

use std::sync::Arc;

use crate::domain::alias::{AliasError, AliasField, Destination};
use crate::ports::AliasStore;

/// Handler for resolving a key. Needs no identity.
pub struct ResolveAliasHandler {
    store: Arc<dyn AliasStore>,
}

impl ResolveAliasHandler {
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self { store }
    }

    /// Returns the destination of the record holding `key`.
    ///
    /// Performs exactly one store read. If several records hold the key,
    /// the first in store order wins.
    pub async fn handle(&self, key: &str) -> Result<Destination, AliasError> {
        let mut matches = self.store.query_equals(AliasField::Key, key).await?;

        if matches.is_empty() {
            tracing::debug!(key = %key, "Alias miss");
            return Err(AliasError::not_found(key));
        }

        let record = matches.swap_remove(0);
        tracing::debug!(key = %key, alias_id = %record.id(), "Alias resolved");
        Ok(record.destination().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAliasStore;
    use crate::domain::alias::{AliasKey, AliasRecord, NewAlias};
    use crate::domain::foundation::{AliasId, AuthenticatedUser, DomainError, ErrorCode, UserId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn owner() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("u").unwrap(), "u@example.com", None, true)
    }

    fn new_alias(key: &str, destination: &str) -> NewAlias {
        NewAlias::for_owner(
            &owner(),
            AliasKey::new(key).unwrap(),
            Destination::new(destination).unwrap(),
        )
    }

    /// Store that returns duplicates for every key and counts reads.
    struct DuplicatingStore {
        reads: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl AliasStore for DuplicatingStore {
        async fn insert(&self, alias: NewAlias) -> Result<AliasRecord, DomainError> {
            Ok(AliasRecord::from_new(AliasId::new(), alias))
        }

        async fn update(&self, _record: &AliasRecord) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &AliasId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &AliasId) -> Result<Option<AliasRecord>, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn query_equals(
            &self,
            _field: AliasField,
            value: &str,
        ) -> Result<Vec<AliasRecord>, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "down"));
            }
            Ok(vec![
                AliasRecord::from_new(AliasId::new(), new_alias(value, "https://first.example")),
                AliasRecord::from_new(AliasId::new(), new_alias(value, "https://second.example")),
            ])
        }

        async fn all(&self) -> Result<Vec<AliasRecord>, DomainError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn resolves_stored_key() {
        let store = Arc::new(InMemoryAliasStore::new());
        store.insert(new_alias("abc", "https://x.com")).await.unwrap();
        let handler = ResolveAliasHandler::new(store);

        let destination = handler.handle("abc").await.unwrap();

        assert_eq!(destination.as_str(), "https://x.com");
    }

    #[tokio::test]
    async fn unknown_key_is_not_found() {
        let handler = ResolveAliasHandler::new(Arc::new(InMemoryAliasStore::new()));

        assert_eq!(
            handler.handle("missing").await.unwrap_err(),
            AliasError::NotFound("missing".to_string())
        );
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() {
        let store = Arc::new(InMemoryAliasStore::new());
        store.insert(new_alias("abc", "https://x.com")).await.unwrap();
        let handler = ResolveAliasHandler::new(store);

        assert!(handler.handle("ABC").await.is_err());
    }

    #[tokio::test]
    async fn first_match_wins_with_single_read() {
        let store = Arc::new(DuplicatingStore {
            reads: AtomicUsize::new(0),
            fail: false,
        });
        let handler = ResolveAliasHandler::new(store.clone());

        let destination = handler.handle("dup").await.unwrap();

        assert_eq!(destination.as_str(), "https://first.example");
        assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn store_failure_is_upstream_unavailable() {
        let handler = ResolveAliasHandler::new(Arc::new(DuplicatingStore {
            reads: AtomicUsize::new(0),
            fail: true,
        }));

        assert!(matches!(
            handler.handle("abc").await,
            Err(AliasError::UpstreamUnavailable(_))
        ));
    }
}
