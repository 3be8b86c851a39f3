use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use carddex_core::record::CardRecord;
use carddex_import::sort_records;
use carddex_scraper::{CardSiteClient, ScrapeProgress, summarize, write_summary};

use super::{SUMMARY_FILE, image_dir, save_store};

/// Run the `scrape` command.
pub(crate) fn run_scrape(data_dir: &Path, skip_images: bool, limit: Option<usize>) {
    let client = match CardSiteClient::new() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    spinner.set_message(format!("Fetching {}...", client.base_url()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let html = match client.fetch_cardlist() {
        Ok(html) => html,
        Err(e) => {
            spinner.finish_and_clear();
            log::error!("Failed to fetch cardlist: {}", e);
            std::process::exit(1);
        }
    };
    spinner.finish_and_clear();

    let mut records = match carddex_scraper::parse_cardlist(&html, client.base_url()) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to parse cardlist: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(max) = limit {
        records.truncate(max);
        log::info!(
            "{}",
            format!("Limit: keeping first {max} cards").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    log::info!(
        "{} {} cards parsed",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        records.len(),
    );

    if !skip_images {
        download_images(&client, &mut records, data_dir);
    }

    sort_records(&mut records);
    save_store(data_dir, &records);

    let summary = summarize(&records);
    if let Err(e) = write_summary(&data_dir.join(SUMMARY_FILE), &summary) {
        log::warn!("Could not write scrape summary: {}", e);
    }

    log::info!(
        "{} Scrape complete: {} cards ({} promo, {} parallel)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.total_cards,
        summary.promo_cards,
        summary.parallel_cards,
    );
}

fn download_images(client: &CardSiteClient, records: &mut [CardRecord], data_dir: &Path) {
    let bar = ProgressBar::new(records.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("  {bar:30.cyan} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    struct BarProgress<'a>(&'a ProgressBar);

    impl ScrapeProgress for BarProgress<'_> {
        fn on_phase(&self, message: &str) {
            self.0.println(message);
        }

        fn on_image(&self, current: usize, _total: usize, file_name: &str) {
            self.0.set_position(current as u64);
            self.0.set_message(file_name.to_string());
        }

        fn on_complete(&self, _message: &str) {}
    }

    match carddex_scraper::download_images(
        client,
        records,
        &image_dir(data_dir),
        &BarProgress(&bar),
    ) {
        Ok(stats) => {
            bar.finish_and_clear();
            log::info!(
                "{} Images: {} downloaded, {} already present, {} failed",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                stats.downloaded,
                stats.skipped,
                stats.failed,
            );
        }
        Err(e) => {
            bar.finish_and_clear();
            log::error!("Image download failed: {}", e);
            std::process::exit(1);
        }
    }
}
