//! Scraper for the official MeMeMe TCG cardlist page.
//!
//! Fetches the cardlist, parses one record per card modal (with a
//! plain-text fallback when the markup changes shape), and downloads
//! card images under the shared filename convention.

pub mod client;
pub mod error;
pub mod media;
pub mod parse;
pub mod progress;

pub use client::{BASE_URL, CARDLIST_PATH, CardSiteClient};
pub use error::ScrapeError;
pub use media::{DownloadStats, ScrapeSummary, download_images, summarize, write_summary};
pub use parse::parse_cardlist;
pub use progress::{LogProgress, ScrapeProgress, SilentProgress};
