//! Alias domain module.
//!
//! An alias maps a short public key to a destination URL. Keys live in one
//! global namespace across all owners; each alias remembers the identity that
//! created it, and that owner (or the administrator) is the only one who can
//! see or change it. Resolution of a key is public.

mod errors;
mod record;
mod values;
pub mod visibility;

pub use errors::AliasError;
pub use record::{AliasRecord, NewAlias};
pub use values::{
    AliasField, AliasKey, Destination, MAX_DESTINATION_LENGTH, MAX_KEY_LENGTH, RESERVED_KEYS,
};
pub use visibility::{can_view, search, visible_to};
