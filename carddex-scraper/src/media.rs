//! Card image downloads and the scrape summary.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use carddex_core::image::{image_file_name, local_image_path};
use carddex_core::record::CardRecord;

use crate::client::CardSiteClient;
use crate::error::ScrapeError;
use crate::progress::ScrapeProgress;

/// Counters from an image download pass.
#[derive(Debug, Default)]
pub struct DownloadStats {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Download the image for every record that has a URL and a parseable
/// number and rarity, skipping files already on disk.
///
/// A single failed download is logged and counted, never fatal.
/// Successful (or already-present) images get the record's
/// `local_image_path` set to the store-relative convention.
pub fn download_images(
    client: &CardSiteClient,
    records: &mut [CardRecord],
    image_dir: &Path,
    progress: &dyn ScrapeProgress,
) -> Result<DownloadStats, ScrapeError> {
    std::fs::create_dir_all(image_dir)?;

    let mut stats = DownloadStats::default();
    let total = records.len();

    for (i, record) in records.iter_mut().enumerate() {
        let Some(url) = record.image_url.clone() else {
            continue;
        };
        let Ok(number) = record.parsed_number() else {
            log::warn!("Skipping image for malformed number '{}'", record.number);
            continue;
        };
        let Some(rarity) = record.parsed_rarity() else {
            log::warn!(
                "Skipping image for '{}': unrecognized rarity '{}'",
                record.number,
                record.rarity
            );
            continue;
        };

        let file_name = image_file_name(&number, &rarity);
        let dest = image_dir.join(&file_name);
        progress.on_image(i + 1, total, &file_name);

        if dest.exists() {
            stats.skipped += 1;
            record.local_image_path = Some(local_image_path(&number, &rarity));
            continue;
        }

        match client.fetch_bytes(&url) {
            Ok(bytes) => {
                std::fs::write(&dest, &bytes)?;
                log::info!("Downloaded {file_name}");
                stats.downloaded += 1;
                record.local_image_path = Some(local_image_path(&number, &rarity));
            }
            Err(e) => {
                log::warn!("Failed to download {url}: {e}");
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

/// Aggregate counts written alongside the store after a scrape.
#[derive(Debug, Serialize)]
pub struct ScrapeSummary {
    pub total_cards: usize,
    pub promo_cards: usize,
    pub parallel_cards: usize,
    pub cards_with_names: usize,
    pub cards_with_costs: usize,
    pub cards_with_abilities: usize,
    pub card_types: Vec<String>,
    pub colors: Vec<String>,
    pub rarities: Vec<String>,
    pub scraped_at: String,
}

pub fn summarize(records: &[CardRecord]) -> ScrapeSummary {
    let distinct = |values: BTreeSet<String>| values.into_iter().collect::<Vec<_>>();

    ScrapeSummary {
        total_cards: records.len(),
        promo_cards: records.iter().filter(|r| r.is_promo).count(),
        parallel_cards: records.iter().filter(|r| r.is_parallel).count(),
        cards_with_names: records.iter().filter(|r| !r.name.is_empty()).count(),
        cards_with_costs: records
            .iter()
            .filter(|r| r.cost.is_some_and(|c| c.total > 0))
            .count(),
        cards_with_abilities: records.iter().filter(|r| r.ability.is_some()).count(),
        card_types: distinct(records.iter().filter_map(|r| r.card_type.clone()).collect()),
        colors: distinct(records.iter().filter_map(|r| r.color.clone()).collect()),
        rarities: distinct(
            records
                .iter()
                .map(|r| r.rarity.clone())
                .filter(|r| !r.is_empty())
                .collect(),
        ),
        scraped_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Write the summary JSON next to the store.
pub fn write_summary(path: &Path, summary: &ScrapeSummary) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    log::info!("Wrote scrape summary to {}", path.display());
    Ok(())
}
