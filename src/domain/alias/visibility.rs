//! Visibility filter: which alias records a caller may see.
//!
//! The administrator sees every record; everyone else sees only the records
//! they own. Search applies the same rule and additionally refuses to match
//! on owner fields for non-administrators. That refusal is silent: the
//! result is empty, not an error.

use crate::domain::foundation::{Caller, OwnedByEmail};

use super::record::AliasRecord;
use super::values::AliasField;

/// `caller.is_admin || caller.email == record.owner_email`.
pub fn can_view(caller: &Caller, record: &AliasRecord) -> bool {
    caller.is_admin || record.is_owned_by(caller.email())
}

/// Keeps only the records `caller` may view.
pub fn visible_to(caller: &Caller, records: Vec<AliasRecord>) -> Vec<AliasRecord> {
    records
        .into_iter()
        .filter(|record| can_view(caller, record))
        .collect()
}

/// Case-insensitive substring search over `field`.
///
/// An empty term matches every visible record.
pub fn search(
    records: &[AliasRecord],
    term: &str,
    field: AliasField,
    caller: &Caller,
) -> Vec<AliasRecord> {
    if field.is_owner_field() && !caller.is_admin {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| can_view(caller, record))
        .filter(|record| record.field(field).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
