//! Identifier allocation.

use crate::record::Record;

/// Next id for an insert: one past the highest id present, or 1 for an
/// empty collection. Derived from the records themselves, not a stored
/// counter, so gaps below the maximum are never filled. `None` once the
/// maximum is `u64::MAX`.
#[must_use]
pub fn next_id(records: &[Record]) -> Option<u64> {
    records
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}
