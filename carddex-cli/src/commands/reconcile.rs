use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use carddex_import::{DiscrepancyReport, reconcile};

use super::{load_official, load_store};

/// Run the `reconcile` command. Read-only: prints the report, never
/// touches the store.
pub(crate) fn run_reconcile(data_dir: &Path, official: Option<String>, json_out: Option<PathBuf>) {
    let records = load_store(data_dir);
    let official = load_official(data_dir, official);

    log::info!(
        "Comparing {} records against {} official entries",
        records.len(),
        official.len(),
    );

    let report = reconcile(&records, &official);
    print_report(&report);

    if let Some(path) = json_out {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::error!("Failed to write report to {}: {}", path.display(), e);
                    std::process::exit(1);
                }
                log::info!("Report written to {}", path.display());
            }
            Err(e) => {
                log::error!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_report(report: &DiscrepancyReport) {
    if report.is_clean() {
        log::info!(
            "\n{} Store matches the official listing.",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
        return;
    }

    if !report.missing_cards.is_empty() {
        log::info!(
            "\n{}",
            format!("Missing cards ({}):", report.missing_cards.len())
                .if_supports_color(Stdout, |t| t.bold()),
        );

        let mut by_type: BTreeMap<&str, Vec<&carddex_import::MissingCard>> = BTreeMap::new();
        for card in &report.missing_cards {
            by_type.entry(card.card_type.as_str()).or_default().push(card);
        }

        for (card_type, cards) in &by_type {
            log::info!(
                "  {}:",
                card_type.if_supports_color(Stdout, |t| t.cyan()),
            );
            for card in cards {
                log::info!(
                    "    {} {} [{}]",
                    card.number.if_supports_color(Stdout, |t| t.bold()),
                    card.name,
                    card.rarity.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }

    if !report.duplicate_entries.is_empty() {
        log::info!(
            "\n{}",
            format!("Duplicate entries ({}):", report.duplicate_entries.len())
                .if_supports_color(Stdout, |t| t.bold()),
        );
        for dup in &report.duplicate_entries {
            log::info!(
                "  {} {} \u{d7}{}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                dup.number.if_supports_color(Stdout, |t| t.bold()),
                dup.count,
            );
            for entry in &dup.entries {
                log::info!("    \"{}\" as {}", entry.name, entry.number);
            }
        }
    }

    if !report.name_mismatches.is_empty() {
        log::info!(
            "\n{}",
            format!("Name mismatches ({}):", report.name_mismatches.len())
                .if_supports_color(Stdout, |t| t.bold()),
        );
        for mismatch in &report.name_mismatches {
            log::info!(
                "  {} \"{}\" -> \"{}\"",
                mismatch.number.if_supports_color(Stdout, |t| t.bold()),
                mismatch.existing_name.if_supports_color(Stdout, |t| t.red()),
                mismatch.official_name.if_supports_color(Stdout, |t| t.green()),
            );
        }
    }

    if !report.promo_orphans.is_empty() {
        log::info!(
            "\n{}",
            format!("Promo variants without a base card ({}):", report.promo_orphans.len())
                .if_supports_color(Stdout, |t| t.bold()),
        );
        for orphan in &report.promo_orphans {
            log::info!(
                "  {} (base {} not found)",
                orphan.number.if_supports_color(Stdout, |t| t.bold()),
                orphan.missing_base,
            );
        }
    }

    if !report.malformed_numbers.is_empty() {
        log::info!(
            "\n{}",
            format!("Malformed numbers ({}):", report.malformed_numbers.len())
                .if_supports_color(Stdout, |t| t.bold()),
        );
        for entry in &report.malformed_numbers {
            log::info!(
                "  {} {} ({})",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                entry.number,
                entry.name,
            );
        }
    }

    if !report.unverified.is_empty() {
        log::info!(
            "\n{}",
            format!("Not in official listing ({}):", report.unverified.len())
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        for card in &report.unverified {
            log::info!(
                "  {}",
                format!("{} {}", card.number, card.name).if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }

    log::info!(
        "\n{} {} discrepancies ({} defects, {} informational)",
        "Summary:".if_supports_color(Stdout, |t| t.bold()),
        report.total(),
        report.defects(),
        report.unverified.len(),
    );
}
