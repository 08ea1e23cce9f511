use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Limits applied to every fetch and extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum number of bytes read from any single response body
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Request-lifetime timeout for a single fetch, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Maximum number of linked stylesheets fetched per page
    #[serde(default = "default_max_stylesheets")]
    pub max_stylesheets: usize,

    /// Maximum number of URLs extracted per batch
    #[serde(default = "default_max_urls")]
    pub max_urls: usize,

    /// Maximum number of characters kept in the body text sample
    #[serde(default = "default_text_sample_chars")]
    pub text_sample_chars: usize,

    /// User-Agent header sent with every request (transport default if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Default value for max_bytes
fn default_max_bytes() -> usize {
    800_000
}

/// Default value for request_timeout_ms
fn default_request_timeout_ms() -> u64 {
    15_000
}

/// Default value for max_stylesheets
fn default_max_stylesheets() -> usize {
    6
}

/// Default value for max_urls
fn default_max_urls() -> usize {
    3
}

/// Default value for text_sample_chars
fn default_text_sample_chars() -> usize {
    5_000
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            request_timeout_ms: default_request_timeout_ms(),
            max_stylesheets: default_max_stylesheets(),
            max_urls: default_max_urls(),
            text_sample_chars: default_text_sample_chars(),
            user_agent: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Timeout applied to each request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Per-stylesheet length cap, a third of the body cap
    pub fn stylesheet_cap(&self) -> usize {
        self.max_bytes / 3
    }
}
