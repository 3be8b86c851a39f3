//! Canonical-number index over the official reference.

use std::collections::BTreeMap;

use carddex_core::number::CardNumber;

use crate::error::RefError;
use crate::official::OfficialCard;

/// The official cardlist keyed by canonical number.
///
/// Iteration order is canonical-number order, which keeps reconciliation
/// reports stable across runs. The reference is ground truth, so a
/// duplicate canonical number here is rejected outright rather than
/// reported.
#[derive(Debug, Clone, Default)]
pub struct OfficialIndex {
    cards: BTreeMap<String, OfficialCard>,
}

impl OfficialIndex {
    pub fn from_cards(cards: Vec<OfficialCard>) -> Result<Self, RefError> {
        let mut index = BTreeMap::new();

        for card in cards {
            let number = CardNumber::parse(&card.card_number)
                .map_err(|_| RefError::MalformedNumber(card.card_number.clone()))?;
            let canonical = number.canonical();
            if index.insert(canonical.clone(), card).is_some() {
                return Err(RefError::DuplicateNumber(canonical));
            }
        }

        Ok(Self { cards: index })
    }

    pub fn get(&self, canonical: &str) -> Option<&OfficialCard> {
        self.cards.get(canonical)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.cards.contains_key(canonical)
    }

    /// Entries in canonical-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OfficialCard)> {
        self.cards.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical numbers in order.
    pub fn numbers(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
