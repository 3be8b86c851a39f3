//! Blocking HTTP client for the official card site.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::ScrapeError;

/// The official site root. Card scans live under
/// `/assets/images/card/`, the cardlist page at [`CARDLIST_PATH`].
pub const BASE_URL: &str = "https://mememe-tcg.com";

/// Path of the page carrying every card modal.
pub const CARDLIST_PATH: &str = "/cardlist";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(100);

/// HTTP client for the card site with a fixed minimum delay between
/// requests.
pub struct CardSiteClient {
    http: reqwest::blocking::Client,
    base_url: String,
    last_request: Mutex<Instant>,
}

impl CardSiteClient {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_base_url(BASE_URL)
    }

    /// Client pointed at an alternate site root (tests use a local
    /// server).
    pub fn with_base_url(base_url: &str) -> Result<Self, ScrapeError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            last_request: Mutex::new(Instant::now() - MIN_REQUEST_INTERVAL),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the cardlist page as HTML.
    pub fn fetch_cardlist(&self) -> Result<String, ScrapeError> {
        let url = format!("{}{CARDLIST_PATH}", self.base_url);
        log::info!("Fetching cardlist from {url}");
        self.get_text(&url)
    }

    /// Fetch an image (or any other asset) as raw bytes.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        self.rate_limit();

        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(ScrapeError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.bytes()?.to_vec())
    }

    /// Resolve a possibly site-relative link against the site root.
    pub fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{href}", self.base_url)
        } else {
            format!("{}/{href}", self.base_url)
        }
    }

    fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        self.rate_limit();

        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(ScrapeError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text()?)
    }

    /// Wait until at least MIN_REQUEST_INTERVAL has passed since the
    /// previous request.
    fn rate_limit(&self) {
        let mut last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
        let elapsed = last.elapsed();
        if elapsed < MIN_REQUEST_INTERVAL {
            std::thread::sleep(MIN_REQUEST_INTERVAL - elapsed);
        }
        *last = Instant::now();
    }
}
