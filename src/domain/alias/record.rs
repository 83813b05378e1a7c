//! Alias record aggregate.
//!
//! An alias maps a globally unique key to a destination and remembers who
//! created it. Owner fields are written once, from the authenticated caller,
//! and have no mutators.

use crate::domain::foundation::{AliasId, AuthenticatedUser, OwnedByEmail, Timestamp};
use serde::{Deserialize, Serialize};

use super::values::{AliasField, AliasKey, Destination};

/// A stored alias.
///
/// # Invariants
///
/// - `id` is assigned by the store and never changes
/// - `owner_email` / `owner_display_name` never change after creation
/// - no two stored records share a `key` (enforced by the store)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    id: AliasId,
    key: AliasKey,
    destination: Destination,
    owner_email: String,
    owner_display_name: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AliasRecord {
    /// Reconstitute a record from persistence (no validation).
    pub fn reconstitute(
        id: AliasId,
        key: AliasKey,
        destination: Destination,
        owner_email: String,
        owner_display_name: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            key,
            destination,
            owner_email,
            owner_display_name,
            created_at,
            updated_at,
        }
    }

    /// Materializes a pending alias under a store-assigned id.
    pub fn from_new(id: AliasId, alias: NewAlias) -> Self {
        Self {
            id,
            key: alias.key,
            destination: alias.destination,
            owner_email: alias.owner_email,
            owner_display_name: alias.owner_display_name,
            created_at: alias.created_at,
            updated_at: alias.created_at,
        }
    }

    pub fn id(&self) -> &AliasId {
        &self.id
    }

    pub fn key(&self) -> &AliasKey {
        &self.key
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub fn owner_display_name(&self) -> &str {
        &self.owner_display_name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the textual value of `field`.
    pub fn field(&self, field: AliasField) -> &str {
        match field {
            AliasField::Key => self.key.as_str(),
            AliasField::Destination => self.destination.as_str(),
            AliasField::OwnerEmail => &self.owner_email,
            AliasField::OwnerDisplayName => &self.owner_display_name,
        }
    }

    /// Points the alias at a new key and destination.
    ///
    /// This is the only mutation a record supports; owner fields are untouched.
    pub fn retarget(&mut self, key: AliasKey, destination: Destination) {
        self.key = key;
        self.destination = destination;
        self.updated_at = Timestamp::now();
    }
}

impl OwnedByEmail for AliasRecord {
    fn owner_email(&self) -> &str {
        &self.owner_email
    }
}

/// An alias that has not been stored yet.
///
/// Only constructible from an authenticated identity, so the owner can never
/// be supplied by the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlias {
    key: AliasKey,
    destination: Destination,
    owner_email: String,
    owner_display_name: String,
    created_at: Timestamp,
}

impl NewAlias {
    pub fn for_owner(owner: &AuthenticatedUser, key: AliasKey, destination: Destination) -> Self {
        Self {
            key,
            destination,
            owner_email: owner.email.clone(),
            owner_display_name: owner.display_name_or_email().to_string(),
            created_at: Timestamp::now(),
        }
    }

    pub fn key(&self) -> &AliasKey {
        &self.key
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub fn owner_display_name(&self) -> &str {
        &self.owner_display_name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
