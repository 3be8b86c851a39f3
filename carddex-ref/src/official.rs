//! Official cardlist records and loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RefError;

/// One entry from the official cardlist.
///
/// The aliases accept the two historical shapes of the reference data:
/// the exported array (`card_number`/`card_name`/`card_type`) and the
/// number-keyed map (`name`/`type`, number implied by the key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialCard {
    #[serde(default)]
    pub card_number: String,
    #[serde(alias = "name")]
    pub card_name: String,
    pub rarity: String,
    #[serde(alias = "type")]
    pub card_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<i64>,
}

/// The two accepted on-disk shapes of the official cardlist.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OfficialFile {
    List(Vec<OfficialCard>),
    Keyed(BTreeMap<String, OfficialCard>),
}

impl OfficialFile {
    fn into_cards(self) -> Vec<OfficialCard> {
        match self {
            Self::List(cards) => cards,
            Self::Keyed(map) => map
                .into_iter()
                .map(|(number, mut card)| {
                    if card.card_number.is_empty() {
                        card.card_number = number;
                    }
                    card
                })
                .collect(),
        }
    }
}

/// Load the official cardlist from a JSON file.
pub fn load_official_list(path: &Path) -> Result<Vec<OfficialCard>, RefError> {
    let contents = std::fs::read_to_string(path).map_err(|e| RefError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: OfficialFile = serde_json::from_str(&contents).map_err(|e| RefError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(file.into_cards())
}

/// Fetch the official cardlist from a URL.
pub fn fetch_official_list(url: &str) -> Result<Vec<OfficialCard>, RefError> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| RefError::download(format!("GET {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(RefError::download(format!(
            "HTTP {} for {url}",
            response.status()
        )));
    }

    let text = response
        .text()
        .map_err(|e| RefError::download(format!("reading body of {url}: {e}")))?;

    let file: OfficialFile = serde_json::from_str(&text).map_err(|e| RefError::Parse {
        path: url.to_string(),
        source: e,
    })?;

    log::info!("Fetched official cardlist from {url}");
    Ok(file.into_cards())
}
