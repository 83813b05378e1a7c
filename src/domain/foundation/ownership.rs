//! Ownership trait for user-owned resources.
//!
//! Resources are owned by the email of the identity that created them.
//! Implementors only expose the owner; the trait supplies the comparison.

/// Trait for records that have a single owning identity.
pub trait OwnedByEmail {
    /// Returns the email of the identity that owns this resource.
    fn owner_email(&self) -> &str;

    /// Checks if the given email is the owner (exact match).
    fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email() == email
    }
}
