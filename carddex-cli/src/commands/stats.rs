use std::collections::BTreeMap;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use carddex_core::number::NumberKind;

use super::load_store;

/// Run the `stats` command.
pub(crate) fn run_stats(data_dir: &Path) {
    let records = load_store(data_dir);

    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_color: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_rarity: BTreeMap<String, usize> = BTreeMap::new();
    let mut regular = 0usize;
    let mut promos = 0usize;
    let mut parallels = 0usize;
    let mut malformed = 0usize;

    for record in &records {
        if let Some(card_type) = &record.card_type {
            *by_type.entry(card_type.clone()).or_default() += 1;
        }
        if let Some(color) = &record.color {
            *by_color.entry(color.clone()).or_default() += 1;
        }
        if !record.rarity.is_empty() {
            *by_rarity.entry(record.rarity.clone()).or_default() += 1;
        }

        match record.parsed_number().map(|n| n.kind().clone()) {
            Ok(NumberKind::Regular) => regular += 1,
            Ok(NumberKind::PromoReprint { .. }) => promos += 1,
            Ok(NumberKind::Parallel { .. }) => parallels += 1,
            Err(_) => malformed += 1,
        }
    }

    log::info!(
        "{} {} cards",
        "Store:".if_supports_color(Stdout, |t| t.bold()),
        records.len(),
    );
    log::info!("  Regular:   {:>5}", regular);
    log::info!("  Promo (P): {:>5}", promos);
    log::info!("  Parallel:  {:>5}", parallels);
    if malformed > 0 {
        log::info!(
            "  {} {:>4}",
            "Malformed:".if_supports_color(Stdout, |t| t.red()),
            malformed,
        );
    }

    print_group("By type", &by_type);
    print_group("By color", &by_color);
    print_group("By rarity", &by_rarity);
}

fn print_group(title: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    log::info!(
        "\n{}",
        format!("{title}:").if_supports_color(Stdout, |t| t.bold()),
    );
    for (key, count) in counts {
        log::info!("  {:<16} {:>5}", key, count);
    }
}
