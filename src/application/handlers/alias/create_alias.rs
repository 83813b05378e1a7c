//! CreateAliasHandler - Command handler for registering a new alias.

use std::sync::Arc;

use crate::domain::alias::{AliasError, AliasField, AliasKey, AliasRecord, Destination, NewAlias};
use crate::domain::foundation::{AdminPolicy, AuthenticatedUser, CommandMetadata};
use crate::ports::AliasStore;

use super::require_verified;

/// Command to create an alias owned by the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateAliasCommand {
    pub user: AuthenticatedUser,
    pub key: String,
    pub destination: String,
}

/// Result of successful alias creation.
#[derive(Debug, Clone)]
pub struct CreateAliasResult {
    pub alias: AliasRecord,
}

/// Handler for creating aliases.
pub struct CreateAliasHandler {
    store: Arc<dyn AliasStore>,
    policy: Arc<AdminPolicy>,
}

impl CreateAliasHandler {
    pub fn new(store: Arc<dyn AliasStore>, policy: Arc<AdminPolicy>) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        cmd: CreateAliasCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateAliasResult, AliasError> {
        // 1. Unverified callers never reach the store
        let caller = self.policy.caller(cmd.user);
        require_verified(&caller)?;

        // 2. Validate
        let key = AliasKey::new(cmd.key)?;
        let destination = Destination::new(cmd.destination)?;

        // 3. Pre-check uniqueness; the store re-checks atomically on insert
        let existing = self.store.query_equals(AliasField::Key, key.as_str()).await?;
        if !existing.is_empty() {
            return Err(AliasError::duplicate_key(key.as_str()));
        }

        // 4. Persist with owner taken from the identity
        let alias = self
            .store
            .insert(NewAlias::for_owner(&caller.user, key, destination))
            .await?;

        tracing::info!(
            alias_id = %alias.id(),
            key = %alias.key(),
            owner = %alias.owner_email(),
            correlation_id = %metadata.correlation_id(),
            source = metadata.source(),
            "Alias created"
        );

        Ok(CreateAliasResult { alias })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAliasStore;
    use crate::domain::foundation::{AliasId, DomainError, ErrorCode, UserId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts calls and can simulate a lost race on insert.
    struct CountingStore {
        calls: AtomicUsize,
        conflict_on_insert: bool,
    }

    impl CountingStore {
        fn new(conflict_on_insert: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                conflict_on_insert,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AliasStore for CountingStore {
        async fn insert(&self, alias: NewAlias) -> Result<AliasRecord, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.conflict_on_insert {
                return Err(DomainError::new(ErrorCode::DuplicateKey, "Key already exists")
                    .with_detail("key", alias.key().as_str()));
            }
            Ok(AliasRecord::from_new(AliasId::new(), alias))
        }

        async fn update(&self, _record: &AliasRecord) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete(&self, _id: &AliasId) -> Result<(), DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn find_by_id(&self, _id: &AliasId) -> Result<Option<AliasRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn query_equals(
            &self,
            _field: AliasField,
            _value: &str,
        ) -> Result<Vec<AliasRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn all(&self) -> Result<Vec<AliasRecord>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    fn user(email: &str, verified: bool) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(email).unwrap(),
            email,
            Some("Umar".to_string()),
            verified,
        )
    }

    fn command(email: &str, key: &str, destination: &str) -> CreateAliasCommand {
        CreateAliasCommand {
            user: user(email, true),
            key: key.to_string(),
            destination: destination.to_string(),
        }
    }

    fn handler(store: Arc<dyn AliasStore>) -> CreateAliasHandler {
        CreateAliasHandler::new(store, Arc::new(AdminPolicy::without_admin()))
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new(UserId::new("u-1").unwrap())
    }

    #[tokio::test]
    async fn creates_alias_owned_by_caller() {
        let store = Arc::new(InMemoryAliasStore::new());
        let handler = handler(store.clone());

        let result = handler
            .handle(command("u@example.com", "abc", "https://x.com"), metadata())
            .await
            .unwrap();

        assert_eq!(result.alias.key().as_str(), "abc");
        assert_eq!(result.alias.destination().as_str(), "https://x.com");
        assert_eq!(result.alias.owner_email(), "u@example.com");
        assert_eq!(result.alias.owner_display_name(), "Umar");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn duplicate_key_from_another_owner_is_rejected() {
        let store = Arc::new(InMemoryAliasStore::new());
        let handler = handler(store.clone());
        handler
            .handle(command("u@example.com", "abc", "https://x.com"), metadata())
            .await
            .unwrap();

        let result = handler
            .handle(command("v@example.com", "abc", "https://y.com"), metadata())
            .await;

        assert_eq!(result.unwrap_err(), AliasError::DuplicateKey("abc".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unverified_caller_is_rejected_before_store_access() {
        let store = Arc::new(CountingStore::new(false));
        let handler = handler(store.clone());
        let mut cmd = command("w@example.com", "x", "y");
        cmd.user.email_verified = false;

        let result = handler.handle(cmd, metadata()).await;

        assert_eq!(result.unwrap_err(), AliasError::EmailNotVerified);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let store = Arc::new(CountingStore::new(false));
        let handler = handler(store.clone());

        let result = handler
            .handle(command("u@example.com", "", "https://x.com"), metadata())
            .await;

        assert!(matches!(result, Err(AliasError::Validation { ref field, .. }) if field == "key"));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn empty_destination_is_rejected() {
        let handler = handler(Arc::new(InMemoryAliasStore::new()));

        let result = handler
            .handle(command("u@example.com", "abc", ""), metadata())
            .await;

        assert!(
            matches!(result, Err(AliasError::Validation { ref field, .. }) if field == "destination")
        );
    }

    #[tokio::test]
    async fn store_conflict_after_precheck_surfaces_as_duplicate_key() {
        let handler = handler(Arc::new(CountingStore::new(true)));

        let result = handler
            .handle(command("u@example.com", "abc", "https://x.com"), metadata())
            .await;

        assert_eq!(result.unwrap_err(), AliasError::DuplicateKey("abc".to_string()));
    }
}
