//! Alias store port.
//!
//! The store is the only shared state of the service. Besides persistence it
//! is the arbitration point for key uniqueness: `insert` and `update` must
//! refuse to produce two records with the same key even when two requests
//! race past the application-level pre-check.

use crate::domain::alias::{AliasField, AliasRecord, NewAlias};
use crate::domain::foundation::{AliasId, DomainError};
use async_trait::async_trait;

/// Persistence port for alias records.
///
/// All queries return records in a stable order (insertion order).
#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Stores a new alias and assigns it an id.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if another record already holds the key
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, alias: NewAlias) -> Result<AliasRecord, DomainError>;

    /// Replaces the stored key and destination of an existing record.
    ///
    /// # Errors
    ///
    /// - `AliasNotFound` if the id does not exist
    /// - `DuplicateKey` if a *different* record already holds the new key
    /// - `DatabaseError` on persistence failure
    async fn update(&self, record: &AliasRecord) -> Result<(), DomainError>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// - `AliasNotFound` if the id does not exist
    async fn delete(&self, id: &AliasId) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &AliasId) -> Result<Option<AliasRecord>, DomainError>;

    /// Records whose `field` equals `value` exactly.
    async fn query_equals(
        &self,
        field: AliasField,
        value: &str,
    ) -> Result<Vec<AliasRecord>, DomainError>;

    /// Every stored record.
    async fn all(&self) -> Result<Vec<AliasRecord>, DomainError>;
}
