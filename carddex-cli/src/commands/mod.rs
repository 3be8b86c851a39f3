pub(crate) mod fix;
pub(crate) mod merge;
pub(crate) mod reconcile;
pub(crate) mod scrape;
pub(crate) mod stats;

use std::path::{Path, PathBuf};

use carddex_core::record::CardRecord;
use carddex_ref::{OfficialIndex, fetch_official_list, load_official_list};

pub(crate) const STORE_FILE: &str = "card_data.json";
pub(crate) const OFFICIAL_FILE: &str = "official_cardlist.json";
pub(crate) const SUMMARY_FILE: &str = "scraping_summary.json";

pub(crate) fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE)
}

pub(crate) fn image_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(carddex_core::image::IMAGE_DIR)
}

pub(crate) fn load_store(data_dir: &Path) -> Vec<CardRecord> {
    match carddex_store::load_records(&store_path(data_dir)) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load card store: {}", e);
            std::process::exit(1);
        }
    }
}

pub(crate) fn save_store(data_dir: &Path, records: &[CardRecord]) {
    if let Err(e) = carddex_store::save_with_backup(&store_path(data_dir), records) {
        log::error!("Failed to save card store: {}", e);
        std::process::exit(1);
    }
}

/// Load the official reference from `--official` (path or URL) or the
/// default location in the data directory.
pub(crate) fn load_official(data_dir: &Path, official: Option<String>) -> OfficialIndex {
    let source = official.unwrap_or_else(|| {
        data_dir
            .join(OFFICIAL_FILE)
            .to_string_lossy()
            .into_owned()
    });

    let cards = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_official_list(&source)
    } else {
        load_official_list(Path::new(&source))
    };

    let cards = match cards {
        Ok(cards) => cards,
        Err(e) => {
            log::error!("Failed to load official cardlist: {}", e);
            std::process::exit(1);
        }
    };

    match OfficialIndex::from_cards(cards) {
        Ok(index) => index,
        Err(e) => {
            log::error!("Official cardlist is not usable as a reference: {}", e);
            std::process::exit(1);
        }
    }
}
