//! The persisted card record schema.
//!
//! Records are the product of best-effort scraping, so every field other
//! than the number may be absent: a missing name element degrades to an
//! empty field, never a rejected record. The descriptive fields (color,
//! type, cost, power, and so on) are opaque to reconciliation logic.

use serde::{Deserialize, Serialize};

use crate::number::{self, CardNumber, NumberError, SortKey};
use crate::rarity::Rarity;

/// Casting cost: a total plus per-color symbol counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCost {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub red: u32,
    #[serde(default)]
    pub blue: u32,
    #[serde(default)]
    pub yellow: u32,
    #[serde(default)]
    pub green: u32,
    #[serde(default)]
    pub colorless: u32,
}

/// Power as it appears on the card: numeric for friends, occasionally a
/// non-numeric marker the site renders as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PowerValue {
    Number(i64),
    Text(String),
}

/// One card in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<CardCost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<PowerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_image_path: Option<String>,
    /// Surface flags kept for JSON compatibility with historical store
    /// files; code classifies via [`CardRecord::parsed_number`] instead.
    #[serde(default)]
    pub is_promo: bool,
    #[serde(default)]
    pub is_parallel: bool,
}

impl CardRecord {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }

    /// Parse and classify the record's number. Errors on the
    /// both-markers defect.
    pub fn parsed_number(&self) -> Result<CardNumber, NumberError> {
        CardNumber::parse(&self.number)
    }

    /// The canonical number used for lookup and deduplication.
    pub fn canonical_number(&self) -> String {
        number::normalize(&self.number)
    }

    pub fn sort_key(&self) -> SortKey {
        number::sort_key(&self.number)
    }

    /// The rarity as a typed value, if the string is well-formed.
    pub fn parsed_rarity(&self) -> Option<Rarity> {
        self.rarity.parse().ok()
    }
}
