//! Merge a supplementary record set into a primary one.
//!
//! Used to recover entries lost from the primary store, e.g. promo
//! cards surviving only in a backup copy. The merge never repairs
//! pre-existing duplicates inside the primary — detecting those is the
//! reconciler's job.

use std::collections::HashSet;

use carddex_core::record::CardRecord;

/// A supplementary record that made it into the merged set.
#[derive(Debug, Clone)]
pub struct AddedRecord {
    pub number: String,
    pub name: String,
}

/// Result of a merge: the combined records plus what got appended.
#[derive(Debug)]
pub struct MergeOutcome {
    pub records: Vec<CardRecord>,
    pub added: Vec<AddedRecord>,
}

/// Append supplementary records the primary set lacks.
///
/// A supplementary record is taken when `predicate` accepts it and its
/// canonical number is not yet present (counting records appended
/// earlier in the same merge), preserving the supplementary set's
/// original order. Given a duplicate-free primary, the result is
/// duplicate-free by construction.
///
/// The output ordering is an artifact of insertion; callers wanting the
/// presentation order run [`sort_records`] afterwards.
pub fn merge_records<F>(
    primary: Vec<CardRecord>,
    supplementary: Vec<CardRecord>,
    predicate: F,
) -> MergeOutcome
where
    F: Fn(&CardRecord) -> bool,
{
    let mut seen: HashSet<String> = primary.iter().map(|r| r.canonical_number()).collect();

    let mut records = primary;
    let mut added = Vec::new();

    for record in supplementary {
        if !predicate(&record) {
            continue;
        }
        if seen.insert(record.canonical_number()) {
            added.push(AddedRecord {
                number: record.number.clone(),
                name: record.name.clone(),
            });
            records.push(record);
        }
    }

    MergeOutcome { records, added }
}

/// Predicate for the historical promo-backup merge: accept records
/// whose number carries a promo or parallel marker.
pub fn is_variant_record(record: &CardRecord) -> bool {
    record
        .parsed_number()
        .map(|n| n.is_variant())
        .unwrap_or(false)
}

/// Sort records into the canonical presentation order.
///
/// Stable, so records with equal keys (including the unparseable
/// sort-last stragglers) keep their relative order.
pub fn sort_records(records: &mut [CardRecord]) {
    records.sort_by_key(|r| r.sort_key());
}
