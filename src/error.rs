use serde_json::json;
use thiserror::Error;

/// Errors surfaced to the caller of a batch extraction
///
/// Per-page and per-stylesheet failures never appear here; they are absorbed
/// by the extractor and only degrade the returned data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The URL list was empty, malformed, or had no usable entries
    #[error("{0}")]
    InvalidInput(String),

    /// Every accepted URL failed to fetch
    #[error("{0}")]
    UpstreamFailure(String),
}

impl ExtractError {
    pub fn no_urls() -> Self {
        Self::InvalidInput("No URLs provided".to_string())
    }

    pub fn invalid_urls() -> Self {
        Self::InvalidInput("Invalid URLs".to_string())
    }

    pub fn all_failed() -> Self {
        Self::UpstreamFailure("Failed to fetch all URLs".to_string())
    }

    /// HTTP status classification for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::UpstreamFailure(_) => 502,
        }
    }

    /// JSON body reported to the caller
    pub fn to_body(&self) -> serde_json::Value {
        json!({ "error": self.to_string() })
    }
}
