use thiserror::Error;

/// Errors that can occur while loading or indexing the official reference.
#[derive(Debug, Error)]
pub enum RefError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Duplicate canonical number in official reference: {0}")]
    DuplicateNumber(String),

    #[error("Malformed number in official reference: {0}")]
    MalformedNumber(String),
}

impl RefError {
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }
}
