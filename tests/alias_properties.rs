//! Property tests for the registry handlers over the in-memory store.
//!
//! - Every key is held by at most one record, however creates interleave
//! - A non-administrator only ever sees their own records
//! - Searching an owner field as a non-administrator yields nothing

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use proptest::prelude::*;

use viewlink::adapters::InMemoryAliasStore;
use viewlink::application::handlers::{
    CreateAliasCommand, CreateAliasHandler, ListAliasesHandler, ListAliasesQuery,
    SearchAliasesHandler, SearchAliasesQuery,
};
use viewlink::domain::alias::{AliasError, AliasField};
use viewlink::domain::foundation::{AdminPolicy, AuthenticatedUser, CommandMetadata, UserId};
use viewlink::ports::AliasStore;

const ADMIN_EMAIL: &str = "admin@example.com";
const OWNERS: [&str; 3] = ["ann@example.com", "bob@example.com", ADMIN_EMAIL];

fn user(email: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(email).unwrap(), email, None, true)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

/// (owner index, key) pairs drawn from a small key space so collisions are common.
fn arb_creates() -> impl Strategy<Value = Vec<(usize, String)>> {
    proptest::collection::vec((0..OWNERS.len(), "[a-d]{1,2}"), 1..40)
}

struct Registry {
    store: Arc<dyn AliasStore>,
    create: Arc<CreateAliasHandler>,
    list: ListAliasesHandler,
    search: SearchAliasesHandler,
}

impl Registry {
    fn new() -> Self {
        let store: Arc<dyn AliasStore> = Arc::new(InMemoryAliasStore::new());
        let policy = Arc::new(AdminPolicy::new(Some(ADMIN_EMAIL.to_string())));
        Self {
            create: Arc::new(CreateAliasHandler::new(store.clone(), policy.clone())),
            list: ListAliasesHandler::new(store.clone(), policy.clone()),
            search: SearchAliasesHandler::new(store.clone(), policy),
            store,
        }
    }

    async fn create(&self, owner: &str, key: &str) -> Result<(), AliasError> {
        let caller = user(owner);
        let metadata = CommandMetadata::new(caller.id.clone());
        self.create
            .handle(
                CreateAliasCommand {
                    user: caller,
                    key: key.to_string(),
                    destination: format!("https://{}.example.com/{}", key, owner),
                },
                metadata,
            )
            .await
            .map(|_| ())
    }
}

proptest! {
    #[test]
    fn keys_stay_unique_under_sequential_creates(creates in arb_creates()) {
        runtime().block_on(async {
            let registry = Registry::new();
            let mut accepted: HashMap<String, usize> = HashMap::new();

            for (owner, key) in &creates {
                match registry.create(OWNERS[*owner], key).await {
                    Ok(()) => *accepted.entry(key.clone()).or_default() += 1,
                    Err(AliasError::DuplicateKey(_)) => {
                        prop_assert!(accepted.contains_key(key));
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }

            prop_assert!(accepted.values().all(|count| *count == 1));

            let all = registry.store.all().await.unwrap();
            let distinct: HashSet<&str> = all.iter().map(|r| r.key().as_str()).collect();
            prop_assert_eq!(distinct.len(), all.len());
            prop_assert_eq!(all.len(), accepted.len());
            Ok(())
        })?;
    }

    #[test]
    fn keys_stay_unique_under_concurrent_creates(creates in arb_creates()) {
        runtime().block_on(async {
            let registry = Arc::new(Registry::new());

            let tasks: Vec<_> = creates
                .iter()
                .cloned()
                .map(|(owner, key)| {
                    let registry = registry.clone();
                    tokio::spawn(async move { registry.create(OWNERS[owner], &key).await })
                })
                .collect();

            let mut successes = 0;
            for task in tasks {
                if task.await.unwrap().is_ok() {
                    successes += 1;
                }
            }

            let distinct_requested: HashSet<&String> = creates.iter().map(|(_, key)| key).collect();
            prop_assert_eq!(successes, distinct_requested.len());
            prop_assert_eq!(registry.store.all().await.unwrap().len(), distinct_requested.len());
            Ok(())
        })?;
    }

    #[test]
    fn listing_respects_ownership(creates in arb_creates(), viewer in 0..OWNERS.len()) {
        runtime().block_on(async {
            let registry = Registry::new();
            for (owner, key) in &creates {
                let _ = registry.create(OWNERS[*owner], key).await;
            }

            let viewer = OWNERS[viewer];
            let listed = registry
                .list
                .handle(ListAliasesQuery { user: user(viewer) })
                .await
                .unwrap();
            let total = registry.store.all().await.unwrap().len();

            if viewer == ADMIN_EMAIL {
                prop_assert_eq!(listed.len(), total);
            } else {
                prop_assert!(listed.iter().all(|r| r.owner_email() == viewer));
                let owned = registry
                    .store
                    .query_equals(AliasField::OwnerEmail, viewer)
                    .await
                    .unwrap();
                prop_assert_eq!(listed.len(), owned.len());
            }
            Ok(())
        })?;
    }

    #[test]
    fn owner_field_search_fails_closed(
        creates in arb_creates(),
        term in "[a-z@.]{0,6}",
        by_display_name in any::<bool>(),
    ) {
        runtime().block_on(async {
            let registry = Registry::new();
            for (owner, key) in &creates {
                let _ = registry.create(OWNERS[*owner], key).await;
            }

            let field = if by_display_name {
                AliasField::OwnerDisplayName
            } else {
                AliasField::OwnerEmail
            };

            for viewer in OWNERS.iter().filter(|email| **email != ADMIN_EMAIL) {
                let found = registry
                    .search
                    .handle(SearchAliasesQuery {
                        user: user(viewer),
                        term: term.clone(),
                        field,
                    })
                    .await
                    .unwrap();
                prop_assert!(found.is_empty());
            }
            Ok(())
        })?;
    }
}
