//! Explicit fix passes over an in-memory record set.
//!
//! Each pass mutates a loaded copy of the store; nothing here touches
//! disk. Callers persist the outcome behind the store's
//! backup-then-write ordering.

use std::collections::HashSet;

use carddex_core::image::{IMAGE_DIR, IMAGE_URL_BASE, image_file_name_with};
use carddex_core::number::{CardNumber, NumberKind};
use carddex_core::rarity::Rarity;
use carddex_core::record::CardRecord;
use carddex_ref::OfficialIndex;

use crate::merge::sort_records;

/// Which fix passes to run.
#[derive(Debug, Clone, Copy)]
pub struct FixOptions {
    /// Drop records whose canonical number was already seen.
    pub dedupe: bool,
    /// Overwrite names that mismatch the official listing.
    pub apply_official_names: bool,
    /// Rewrite image URL and local path to the canonical convention.
    pub fix_image_paths: bool,
    /// Rewrite promo reprints to the `"{base} (P)"` surface form.
    pub restore_promo_notation: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            dedupe: true,
            apply_official_names: true,
            fix_image_paths: true,
            restore_promo_notation: false,
        }
    }
}

/// Counters from a fix run.
#[derive(Debug, Default)]
pub struct FixStats {
    pub duplicates_removed: usize,
    pub names_fixed: usize,
    pub image_paths_fixed: usize,
    pub numbers_rewritten: usize,
}

/// A record dropped by the dedupe pass.
#[derive(Debug, Clone)]
pub struct RemovedDuplicate {
    pub number: String,
    pub name: String,
}

/// A name overwritten from the official listing.
#[derive(Debug, Clone)]
pub struct NameFix {
    pub number: String,
    pub old_name: String,
    pub new_name: String,
}

/// Result of a fix run: the repaired records plus per-pass details.
#[derive(Debug)]
pub struct FixOutcome {
    pub records: Vec<CardRecord>,
    pub stats: FixStats,
    pub removed: Vec<RemovedDuplicate>,
    pub name_fixes: Vec<NameFix>,
}

/// Decide whether a variant number is a promo reprint or a true
/// parallel.
///
/// The `(P)` notation is explicit. A `-P` number with a `-P` rarity is
/// a parallel (it has its own rarity). Otherwise the official reference
/// settles it: the official site lists promo reprints under the `-P`
/// form, while true parallels are absent from it.
pub fn classify_variant(
    number: &CardNumber,
    rarity: Option<&Rarity>,
    official: &OfficialIndex,
) -> NumberKind {
    match number.kind() {
        NumberKind::Parallel { base } => {
            if rarity.is_some_and(|r| r.parallel) {
                number.kind().clone()
            } else if official.contains(&number.canonical()) {
                NumberKind::PromoReprint { base: base.clone() }
            } else {
                number.kind().clone()
            }
        }
        kind => kind.clone(),
    }
}

/// Run the selected fix passes and sort the result canonically.
pub fn fix_records(
    records: Vec<CardRecord>,
    official: &OfficialIndex,
    options: &FixOptions,
) -> FixOutcome {
    let mut stats = FixStats::default();
    let mut removed = Vec::new();
    let mut name_fixes = Vec::new();

    let mut records = if options.dedupe {
        dedupe(records, &mut stats, &mut removed)
    } else {
        records
    };

    if options.apply_official_names {
        apply_official_names(&mut records, official, &mut stats, &mut name_fixes);
    }

    if options.fix_image_paths {
        standardize_image_paths(&mut records, official, &mut stats);
    }

    if options.restore_promo_notation {
        restore_promo_notation(&mut records, official, &mut stats);
    }

    sort_records(&mut records);

    FixOutcome {
        records,
        stats,
        removed,
        name_fixes,
    }
}

/// Keep the first record per canonical number, dropping the rest.
fn dedupe(
    records: Vec<CardRecord>,
    stats: &mut FixStats,
    removed: &mut Vec<RemovedDuplicate>,
) -> Vec<CardRecord> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(record.canonical_number()) {
            kept.push(record);
        } else {
            log::info!("Removing duplicate: {} - {}", record.number, record.name);
            stats.duplicates_removed += 1;
            removed.push(RemovedDuplicate {
                number: record.number.clone(),
                name: record.name.clone(),
            });
        }
    }

    kept
}

/// Overwrite names that disagree with the official listing.
fn apply_official_names(
    records: &mut [CardRecord],
    official: &OfficialIndex,
    stats: &mut FixStats,
    name_fixes: &mut Vec<NameFix>,
) {
    for record in records.iter_mut() {
        let Ok(number) = record.parsed_number() else {
            continue;
        };
        if let Some(card) = official.get(&number.canonical())
            && record.name != card.card_name
        {
            log::info!(
                "Fixed name for {}: '{}' -> '{}'",
                record.number,
                record.name,
                card.card_name
            );
            name_fixes.push(NameFix {
                number: record.number.clone(),
                old_name: record.name.clone(),
                new_name: card.card_name.clone(),
            });
            record.name = card.card_name.clone();
            stats.names_fixed += 1;
        }
    }
}

/// Rewrite image URL and local path to the canonical filename
/// convention. Records with unparseable numbers or rarities are left
/// alone — partial records are legal, and guessing paths for them
/// isn't.
fn standardize_image_paths(
    records: &mut [CardRecord],
    official: &OfficialIndex,
    stats: &mut FixStats,
) {
    for record in records.iter_mut() {
        let Ok(number) = record.parsed_number() else {
            continue;
        };
        let Some(rarity) = record.parsed_rarity() else {
            continue;
        };

        let kind = classify_variant(&number, Some(&rarity), official);
        let file = image_file_name_with(number.base(), &kind, &rarity);
        let url = format!("{IMAGE_URL_BASE}/{file}");
        let path = format!("{IMAGE_DIR}/{file}");

        if record.image_url.as_deref() != Some(url.as_str())
            || record.local_image_path.as_deref() != Some(path.as_str())
        {
            log::debug!("Updated image paths for {}", record.number);
            record.image_url = Some(url);
            record.local_image_path = Some(path);
            stats.image_paths_fixed += 1;
        }
    }
}

/// Rewrite promo reprints from the `-P` surface form back to
/// `"{base} (P)"`. True parallels keep `-P` in both number and rarity.
fn restore_promo_notation(
    records: &mut [CardRecord],
    official: &OfficialIndex,
    stats: &mut FixStats,
) {
    for record in records.iter_mut() {
        let Ok(number) = record.parsed_number() else {
            continue;
        };
        if !matches!(number.kind(), NumberKind::Parallel { .. }) {
            continue;
        }

        let rarity = record.parsed_rarity();
        if let NumberKind::PromoReprint { base } =
            classify_variant(&number, rarity.as_ref(), official)
        {
            log::info!("Restored promo notation: {} -> {base} (P)", record.number);
            record.number = format!("{base} (P)");
            stats.numbers_rewritten += 1;
        }
    }
}

/// Membership comparison against the official reference.
#[derive(Debug, Default)]
pub struct CompletenessReport {
    /// Official canonical numbers missing from the records.
    pub missing: Vec<String>,
    /// Record canonical numbers the reference doesn't list.
    pub extra: Vec<String>,
}

/// Check that every official canonical number is present, and list the
/// extras. Informational — extras are expected when the reference is
/// incomplete.
pub fn verify_completeness(records: &[CardRecord], official: &OfficialIndex) -> CompletenessReport {
    let have: HashSet<String> = records.iter().map(|r| r.canonical_number()).collect();

    let missing = official
        .numbers()
        .filter(|n| !have.contains(*n))
        .map(String::from)
        .collect();

    let mut extra: Vec<String> = have
        .into_iter()
        .filter(|n| !official.contains(n))
        .collect();
    extra.sort_by_key(|n| carddex_core::number::sort_key(n));

    CompletenessReport { missing, extra }
}
