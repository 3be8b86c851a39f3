//! Reconciliation, merging, and fix passes over the card store.
//!
//! This crate owns the record-set logic: comparing the curated store
//! against the official reference, merging supplementary sets, and the
//! explicit mutating fix passes. Reconciliation is pure — it never
//! touches its inputs; every fix is a separate operation on an
//! in-memory copy, persisted by the caller behind backup-then-write.

pub mod fix;
pub mod merge;
pub mod reconcile;

pub use fix::{
    CompletenessReport, FixOptions, FixOutcome, FixStats, NameFix, RemovedDuplicate,
    classify_variant, fix_records, verify_completeness,
};
pub use merge::{AddedRecord, MergeOutcome, is_variant_record, merge_records, sort_records};
pub use reconcile::{
    DiscrepancyReport, DuplicateEntry, DuplicateItem, MalformedEntry, MissingCard, NameMismatch,
    PromoOrphan, UnverifiedCard, reconcile,
};
