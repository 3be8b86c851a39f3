use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use carddex_import::{FixOptions, fix_records, verify_completeness};

use super::{load_official, load_store, save_store};

/// Run the `fix` command.
pub(crate) fn run_fix(
    data_dir: &Path,
    official: Option<String>,
    promo_notation: bool,
    dry_run: bool,
) {
    let records = load_store(data_dir);
    let official = load_official(data_dir, official);

    if dry_run {
        log::info!(
            "{}",
            "Dry run: no changes will be written".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let options = FixOptions {
        restore_promo_notation: promo_notation,
        ..FixOptions::default()
    };
    let outcome = fix_records(records, &official, &options);

    for removed in &outcome.removed {
        log::info!(
            "  {} dropped duplicate {} ({})",
            "-".if_supports_color(Stdout, |t| t.yellow()),
            removed.number.if_supports_color(Stdout, |t| t.bold()),
            removed.name,
        );
    }
    for fix in &outcome.name_fixes {
        log::info!(
            "  {} {} \"{}\" -> \"{}\"",
            "~".if_supports_color(Stdout, |t| t.cyan()),
            fix.number.if_supports_color(Stdout, |t| t.bold()),
            fix.old_name.if_supports_color(Stdout, |t| t.red()),
            fix.new_name.if_supports_color(Stdout, |t| t.green()),
        );
    }

    let stats = &outcome.stats;
    log::info!(
        "\n{} {} duplicates removed, {} names fixed, {} image paths updated, {} numbers rewritten",
        "Fixes:".if_supports_color(Stdout, |t| t.bold()),
        stats.duplicates_removed,
        stats.names_fixed,
        stats.image_paths_fixed,
        stats.numbers_rewritten,
    );

    let completeness = verify_completeness(&outcome.records, &official);
    if completeness.missing.is_empty() {
        log::info!(
            "{} Every official card is present ({} records)",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            outcome.records.len(),
        );
    } else {
        log::info!(
            "{} {} official cards still missing: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            completeness.missing.len(),
            completeness.missing.join(", "),
        );
    }
    if !completeness.extra.is_empty() {
        log::info!(
            "{}",
            format!(
                "{} records not in the official listing",
                completeness.extra.len()
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if !dry_run {
        save_store(data_dir, &outcome.records);
    }
}
