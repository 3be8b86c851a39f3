use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use carddex_import::{is_variant_record, merge_records, sort_records};

use super::{load_store, save_store};

/// Run the `merge` command.
pub(crate) fn run_merge(data_dir: &Path, source: &Path, promos_only: bool, dry_run: bool) {
    let primary = load_store(data_dir);
    let supplementary = match carddex_store::load_records(source) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load supplementary store: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Merging {} supplementary records into {} existing",
        supplementary.len(),
        primary.len(),
    );
    if promos_only {
        log::info!(
            "{}",
            "Only taking promo and parallel records".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no changes will be written".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let outcome = if promos_only {
        merge_records(primary, supplementary, is_variant_record)
    } else {
        merge_records(primary, supplementary, |_| true)
    };

    if outcome.added.is_empty() {
        log::info!(
            "\n{}",
            "Nothing to merge: every record is already present."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    let verb = if dry_run { "Would add" } else { "Added" };
    log::info!("");
    for added in &outcome.added {
        log::info!(
            "  {} {} {}",
            "+".if_supports_color(Stdout, |t| t.green()),
            added.number.if_supports_color(Stdout, |t| t.bold()),
            added.name,
        );
    }
    log::info!(
        "\n{} {} records",
        verb.if_supports_color(Stdout, |t| t.bold()),
        outcome.added.len(),
    );

    if !dry_run {
        let mut records = outcome.records;
        sort_records(&mut records);
        save_store(data_dir, &records);
    }
}
