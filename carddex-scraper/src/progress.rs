//! Scrape progress reporting.

/// Trait for receiving scrape progress updates.
pub trait ScrapeProgress {
    /// Called when a phase starts (e.g., "Downloading card images").
    fn on_phase(&self, message: &str);

    /// Called after each card image is handled.
    fn on_image(&self, current: usize, total: usize, file_name: &str);

    /// Called when the scrape is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ScrapeProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_image(&self, _current: usize, _total: usize, _file_name: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ScrapeProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_image(&self, current: usize, total: usize, file_name: &str) {
        if current.is_multiple_of(25) || current == total {
            log::info!("  [{}/{}] {}", current, total, file_name);
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
