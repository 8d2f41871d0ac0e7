//! Record store merging.

use std::collections::btree_map::Entry;
use std::ops::AddAssign;

use tabmerge_model::{MergePolicy, RecordStore};

/// Counts describing what one merge changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Identifiers that were not in the store before.
    pub inserted: usize,
    /// Identifiers that already existed and received incoming columns.
    pub updated: usize,
    /// Cells added to records that already existed.
    pub added: usize,
    /// Cells whose earlier value was replaced or dropped.
    pub overwritten: usize,
}

impl MergeStats {
    /// True when the merge left the store exactly as it was.
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.added == 0 && self.overwritten == 0
    }
}

impl AddAssign for MergeStats {
    fn add_assign(&mut self, other: Self) {
        self.inserted += other.inserted;
        self.updated += other.updated;
        self.added += other.added;
        self.overwritten += other.overwritten;
    }
}

/// Merges `incoming` into `existing` with the union policy and returns the
/// updated store.
pub fn merge(mut existing: RecordStore, incoming: RecordStore) -> RecordStore {
    merge_into(&mut existing, incoming, MergePolicy::Union);
    existing
}

/// Merges `incoming` into `existing` in place.
///
/// With [`MergePolicy::Union`], a record whose identifier is already present
/// is overlaid column by column: incoming values replace existing values for
/// the columns the incoming record carries, columns only the existing record
/// has are kept, and new columns are added. New identifiers are inserted as-is.
///
/// With [`MergePolicy::Replace`], an incoming record replaces the existing
/// record for its identifier entirely.
pub fn merge_into(
    existing: &mut RecordStore,
    incoming: RecordStore,
    policy: MergePolicy,
) -> MergeStats {
    let mut stats = MergeStats::default();
    for (id, record) in incoming {
        match existing.entry(id) {
            Entry::Vacant(slot) => {
                stats.inserted += 1;
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                stats.updated += 1;
                let current = slot.get_mut();
                match policy {
                    MergePolicy::Union => {
                        for (column, value) in record {
                            match current.insert(column, value.as_str()) {
                                None => stats.added += 1,
                                Some(previous) if previous != value => stats.overwritten += 1,
                                Some(_) => {}
                            }
                        }
                    }
                    MergePolicy::Replace => {
                        stats.added += record
                            .columns()
                            .filter(|column| !current.contains(column))
                            .count();
                        stats.overwritten += current
                            .iter()
                            .filter(|(column, value)| record.get(column) != Some(*value))
                            .count();
                        *current = record;
                    }
                }
            }
        }
    }
    stats
}
