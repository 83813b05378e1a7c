//! Alias value objects: the public key, the destination and field selectors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Maximum length of an alias key, in characters.
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum length of a destination, in characters.
pub const MAX_DESTINATION_LENGTH: usize = 2048;

/// Path segments served by the service itself; a key equal to one of these
/// could never be reached at `/<key>`.
pub const RESERVED_KEYS: &[&str] = &["api", "health"];

/// The short public identifier resolved at `/<key>`.
///
/// # Invariants
///
/// - non-empty, at most [`MAX_KEY_LENGTH`] characters
/// - contains no `/` (it must fit in one path segment)
/// - not one of [`RESERVED_KEYS`]
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasKey(String);

impl AliasKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("key"));
        }
        let length = key.chars().count();
        if length > MAX_KEY_LENGTH {
            return Err(ValidationError::too_long("key", MAX_KEY_LENGTH, length));
        }
        if key.contains('/') {
            return Err(ValidationError::invalid_format("key", "must not contain '/'"));
        }
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(ValidationError::reserved("key", key));
        }
        Ok(Self(key))
    }

    /// Wraps a key read back from storage without re-checking the rules.
    ///
    /// Rows written before a rule existed must stay readable.
    pub fn from_stored(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AliasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an alias points. Intended to be a URL but not validated as one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    pub fn new(destination: impl Into<String>) -> Result<Self, ValidationError> {
        let destination = destination.into();
        if destination.is_empty() {
            return Err(ValidationError::empty_field("destination"));
        }
        let length = destination.chars().count();
        if length > MAX_DESTINATION_LENGTH {
            return Err(ValidationError::too_long(
                "destination",
                MAX_DESTINATION_LENGTH,
                length,
            ));
        }
        Ok(Self(destination))
    }

    /// Wraps a destination read back from storage without re-checking it.
    pub fn from_stored(destination: impl Into<String>) -> Self {
        Self(destination.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selects one field of an alias record, for store equality queries and
/// for search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasField {
    #[default]
    Key,
    #[serde(alias = "link")]
    Destination,
    #[serde(alias = "email_id", alias = "emailId")]
    OwnerEmail,
    #[serde(alias = "email_name", alias = "emailName")]
    OwnerDisplayName,
}

impl AliasField {
    /// Owner fields expose other users' identities and are admin-only in search.
    pub fn is_owner_field(&self) -> bool {
        matches!(self, AliasField::OwnerEmail | AliasField::OwnerDisplayName)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AliasField::Key => "key",
            AliasField::Destination => "destination",
            AliasField::OwnerEmail => "owner_email",
            AliasField::OwnerDisplayName => "owner_display_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accepts_plain_value() {
        let key = AliasKey::new("resume").unwrap();
        assert_eq!(key.as_str(), "resume");
    }

    #[test]
    fn key_keeps_case_and_whitespace() {
        assert_eq!(AliasKey::new("My Link").unwrap().as_str(), "My Link");
        assert_ne!(AliasKey::new("abc").unwrap(), AliasKey::new("ABC").unwrap());
    }

    #[test]
    fn key_rejects_empty() {
        assert_eq!(AliasKey::new(""), Err(ValidationError::empty_field("key")));
    }

    #[test]
    fn key_rejects_slash() {
        assert!(matches!(
            AliasKey::new("a/b"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn key_rejects_reserved_segments() {
        assert_eq!(
            AliasKey::new("api"),
            Err(ValidationError::reserved("key", "api"))
        );
        assert!(matches!(
            AliasKey::new("health"),
            Err(ValidationError::Reserved { .. })
        ));
        assert!(AliasKey::new("apis").is_ok());
    }

    #[test]
    fn key_rejects_overlong_value() {
        let key = "k".repeat(MAX_KEY_LENGTH + 1);
        assert!(matches!(
            AliasKey::new(key),
            Err(ValidationError::TooLong { max: MAX_KEY_LENGTH, .. })
        ));
    }

    #[test]
    fn stored_values_bypass_current_rules() {
        let legacy = "a/".repeat(MAX_KEY_LENGTH);
        assert_eq!(AliasKey::from_stored(legacy.clone()).as_str(), legacy);
        assert_eq!(AliasKey::from_stored("api").as_str(), "api");

        let long = "d".repeat(MAX_DESTINATION_LENGTH + 1);
        assert_eq!(Destination::from_stored(long.clone()).as_str(), long);
    }

    #[test]
    fn destination_is_not_url_validated() {
        assert!(Destination::new("not a url").is_ok());
    }

    #[test]
    fn destination_rejects_empty() {
        assert_eq!(
            Destination::new(""),
            Err(ValidationError::empty_field("destination"))
        );
    }

    #[test]
    fn field_deserializes_from_wire_names() {
        let field: AliasField = serde_json::from_str("\"owner_email\"").unwrap();
        assert_eq!(field, AliasField::OwnerEmail);

        let field: AliasField = serde_json::from_str("\"link\"").unwrap();
        assert_eq!(field, AliasField::Destination);

        let field: AliasField = serde_json::from_str("\"emailName\"").unwrap();
        assert_eq!(field, AliasField::OwnerDisplayName);
    }

    #[test]
    fn only_owner_fields_are_owner_fields() {
        assert!(!AliasField::Key.is_owner_field());
        assert!(!AliasField::Destination.is_owner_field());
        assert!(AliasField::OwnerEmail.is_owner_field());
        assert!(AliasField::OwnerDisplayName.is_owner_field());
    }
}
