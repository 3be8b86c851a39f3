//! Discrepancy analysis between the card store and the official reference.
//!
//! `reconcile` is a pure read/compute/report operation: it classifies
//! every existing record once, builds a canonical-number lookup, and
//! emits a report grouped by defect category. It never mutates input
//! data — fixes are explicit, separate passes (see [`crate::fix`]) — so
//! a reconciliation failure cannot corrupt the store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use carddex_core::number::CardNumber;
use carddex_core::record::CardRecord;
use carddex_ref::OfficialIndex;

/// An official card absent from the existing set.
#[derive(Debug, Clone, Serialize)]
pub struct MissingCard {
    pub number: String,
    pub name: String,
    pub rarity: String,
    pub card_type: String,
}

/// One raw record participating in a duplicate group.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateItem {
    pub number: String,
    pub name: String,
}

/// Two or more existing records sharing one canonical number.
///
/// Duplicates are reported, never auto-resolved: picking the surviving
/// entry needs the human-curated choice of which raw form is canonical.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateEntry {
    pub number: String,
    pub count: usize,
    pub entries: Vec<DuplicateItem>,
}

/// An existing name that differs from the official one, kept as a
/// before/after pair.
#[derive(Debug, Clone, Serialize)]
pub struct NameMismatch {
    pub number: String,
    pub existing_name: String,
    pub official_name: String,
}

/// An existing canonical number the official reference doesn't list.
/// Informational — the reference may simply be incomplete.
#[derive(Debug, Clone, Serialize)]
pub struct UnverifiedCard {
    pub number: String,
    pub name: String,
}

/// A promo or parallel number whose unsuffixed base card exists in
/// neither the existing nor the official space.
#[derive(Debug, Clone, Serialize)]
pub struct PromoOrphan {
    pub number: String,
    pub missing_base: String,
}

/// A number carrying both promo markers at once. Flagged, never
/// coerced, and excluded from the canonical lookup so the defect stays
/// visible.
#[derive(Debug, Clone, Serialize)]
pub struct MalformedEntry {
    pub number: String,
    pub name: String,
}

/// The structured discrepancy report, grouped by category.
///
/// `missing_cards` follow canonical-number order (the official index
/// iterates sorted); every other category preserves input iteration
/// order.
#[derive(Debug, Default, Serialize)]
pub struct DiscrepancyReport {
    pub missing_cards: Vec<MissingCard>,
    pub duplicate_entries: Vec<DuplicateEntry>,
    pub name_mismatches: Vec<NameMismatch>,
    pub unverified: Vec<UnverifiedCard>,
    pub promo_orphans: Vec<PromoOrphan>,
    pub malformed_numbers: Vec<MalformedEntry>,
}

impl DiscrepancyReport {
    /// True when no category holds any entry (unverified included —
    /// clean means nothing to look at).
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.missing_cards.len()
            + self.duplicate_entries.len()
            + self.name_mismatches.len()
            + self.unverified.len()
            + self.promo_orphans.len()
            + self.malformed_numbers.len()
    }

    /// Defect count excluding the informational categories.
    pub fn defects(&self) -> usize {
        self.total() - self.unverified.len()
    }
}

/// Compare the existing record set against the official reference.
pub fn reconcile(existing: &[CardRecord], official: &OfficialIndex) -> DiscrepancyReport {
    let mut report = DiscrepancyReport::default();

    // Classify every number once; build canonical number -> records,
    // keeping first-seen order and every entry (duplicates included).
    let mut order: Vec<String> = Vec::new();
    let mut by_number: HashMap<String, Vec<&CardRecord>> = HashMap::new();
    let mut parsed: Vec<(CardNumber, &CardRecord)> = Vec::new();

    for record in existing {
        match record.parsed_number() {
            Ok(number) => {
                match by_number.entry(number.canonical()) {
                    Entry::Vacant(slot) => {
                        order.push(slot.key().clone());
                        slot.insert(vec![record]);
                    }
                    Entry::Occupied(mut slot) => slot.get_mut().push(record),
                }
                parsed.push((number, record));
            }
            Err(_) => report.malformed_numbers.push(MalformedEntry {
                number: record.number.clone(),
                name: record.name.clone(),
            }),
        }
    }

    // Completeness: every official canonical number must exist locally.
    for (canonical, card) in official.iter() {
        if !by_number.contains_key(canonical) {
            report.missing_cards.push(MissingCard {
                number: canonical.to_string(),
                name: card.card_name.clone(),
                rarity: card.rarity.clone(),
                card_type: card.card_type.clone(),
            });
        }
    }

    // Duplicates, name checks, and unverified entries in input order.
    for canonical in &order {
        let records = &by_number[canonical];

        if records.len() > 1 {
            report.duplicate_entries.push(DuplicateEntry {
                number: canonical.clone(),
                count: records.len(),
                entries: records
                    .iter()
                    .map(|r| DuplicateItem {
                        number: r.number.clone(),
                        name: r.name.clone(),
                    })
                    .collect(),
            });
        }

        match official.get(canonical) {
            Some(card) => {
                for record in records {
                    if record.name != card.card_name {
                        report.name_mismatches.push(NameMismatch {
                            number: canonical.clone(),
                            existing_name: record.name.clone(),
                            official_name: card.card_name.clone(),
                        });
                    }
                }
            }
            None => report.unverified.push(UnverifiedCard {
                number: canonical.clone(),
                name: records[0].name.clone(),
            }),
        }
    }

    // Promo orphans: a variant whose base card exists nowhere in the
    // combined existing + official space.
    for (number, record) in &parsed {
        if number.is_variant() {
            let base = number.base();
            if !by_number.contains_key(base) && !official.contains(base) {
                report.promo_orphans.push(PromoOrphan {
                    number: record.number.clone(),
                    missing_base: base.to_string(),
                });
            }
        }
    }

    report
}
