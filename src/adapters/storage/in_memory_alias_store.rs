//! In-memory alias store.
//!
//! Used when no database is configured, and by tests. A single write lock
//! guards both the records and the key index, so the uniqueness check and
//! the write it protects happen atomically.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::alias::{AliasField, AliasRecord, NewAlias};
use crate::domain::foundation::{AliasId, DomainError, ErrorCode};
use crate::ports::AliasStore;

#[derive(Debug, Default)]
struct Inner {
    /// Records in insertion order.
    records: Vec<AliasRecord>,
    /// key -> id of the record holding it.
    keys: HashMap<String, AliasId>,
}

impl Inner {
    fn position(&self, id: &AliasId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

/// Alias store backed by process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAliasStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryAliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn duplicate_key(key: &str) -> DomainError {
    DomainError::new(ErrorCode::DuplicateKey, "Key already exists").with_detail("key", key)
}

fn not_found(id: &AliasId) -> DomainError {
    DomainError::new(ErrorCode::AliasNotFound, format!("Alias not found: {}", id))
        .with_detail("id", id.to_string())
}

#[async_trait]
impl AliasStore for InMemoryAliasStore {
    async fn insert(&self, alias: NewAlias) -> Result<AliasRecord, DomainError> {
        let mut inner = self.inner.write().await;
        let key = alias.key().as_str().to_string();
        if inner.keys.contains_key(&key) {
            return Err(duplicate_key(&key));
        }

        let record = AliasRecord::from_new(AliasId::new(), alias);
        inner.keys.insert(key, *record.id());
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: &AliasRecord) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(record.id()).ok_or_else(|| not_found(record.id()))?;

        let new_key = record.key().as_str();
        if let Some(holder) = inner.keys.get(new_key) {
            if holder != record.id() {
                return Err(duplicate_key(new_key));
            }
        }

        let old_key = inner.records[index].key().as_str().to_string();
        inner.keys.remove(&old_key);
        inner.keys.insert(new_key.to_string(), *record.id());
        inner.records[index] = record.clone();
        Ok(())
    }

    async fn delete(&self, id: &AliasId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id).ok_or_else(|| not_found(id))?;

        let removed = inner.records.remove(index);
        inner.keys.remove(removed.key().as_str());
        Ok(())
    }

    async fn find_by_id(&self, id: &AliasId) -> Result<Option<AliasRecord>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.id() == id).cloned())
    }

    async fn query_equals(
        &self,
        field: AliasField,
        value: &str,
    ) -> Result<Vec<AliasRecord>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| r.field(field) == value)
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<AliasRecord>, DomainError> {
        Ok(self.inner.read().await.records.clone())
    }
}
