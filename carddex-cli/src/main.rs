//! carddex CLI
//!
//! Command-line interface for scraping, reconciling, and repairing the
//! MeMeMe TCG card database.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "carddex")]
#[command(about = "Manage the MeMeMe TCG card database", long_about = None)]
struct Cli {
    /// Data directory holding the store, official reference, and images
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the official cardlist page into the store
    Scrape {
        /// Don't download card images
        #[arg(long)]
        skip_images: bool,

        /// Maximum number of cards to keep (for testing)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare the store against the official reference (read-only)
    Reconcile {
        /// Official cardlist path or URL (default: <data-dir>/official_cardlist.json)
        #[arg(long)]
        official: Option<String>,

        /// Write the full report as JSON to this path
        #[arg(long)]
        json_out: Option<PathBuf>,
    },

    /// Merge records from a supplementary store into the primary
    Merge {
        /// Supplementary store JSON file
        source: PathBuf,

        /// Only take promo and parallel variant records
        #[arg(long)]
        promos_only: bool,

        /// Show what would be merged without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Repair the store against the official reference
    Fix {
        /// Official cardlist path or URL (default: <data-dir>/official_cardlist.json)
        #[arg(long)]
        official: Option<String>,

        /// Also rewrite promo reprints to the "{base} (P)" notation
        #[arg(long)]
        promo_notation: bool,

        /// Show what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Summarize the store
    Stats,
}

fn main() {
    // log::info! doubles as the CLI's println; keep the output bare.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            if record.level() == log::Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{}: {}", record.level().to_string().to_lowercase(), record.args())
            }
        })
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { skip_images, limit } => {
            commands::scrape::run_scrape(&cli.data_dir, skip_images, limit);
        }
        Commands::Reconcile { official, json_out } => {
            commands::reconcile::run_reconcile(&cli.data_dir, official, json_out);
        }
        Commands::Merge {
            source,
            promos_only,
            dry_run,
        } => {
            commands::merge::run_merge(&cli.data_dir, &source, promos_only, dry_run);
        }
        Commands::Fix {
            official,
            promo_notation,
            dry_run,
        } => {
            commands::fix::run_fix(&cli.data_dir, official, promo_notation, dry_run);
        }
        Commands::Stats => {
            commands::stats::run_stats(&cli.data_dir);
        }
    }
}
