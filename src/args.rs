use clap::Parser;
use serde_json::json;
use site_extract::ExtractorConfig;
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-extract")]
#[command(about = "Extracts title, description, stylesheets and text from a few web pages")]
#[command(version)]
pub struct Args {
    /// URLs to extract (only the first 3 valid http/https URLs are used)
    pub urls: Vec<String>,

    /// Read a JSON request body ({"urls": [...]}) from a file, or `-` for stdin
    #[arg(short, long, conflicts_with = "urls")]
    pub request: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Maximum bytes read from any single response body
    #[arg(long)]
    pub max_bytes: Option<usize>,

    /// Serve POST /extract on this address instead of running once
    #[arg(long, value_name = "ADDR", conflicts_with_all = ["urls", "request"])]
    pub serve: Option<String>,
}

impl Args {
    /// Configuration file (or defaults) with command-line overrides applied
    pub fn load_config(&self) -> Result<ExtractorConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::new(),
        };

        if let Some(timeout_ms) = self.timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
        if let Some(max_bytes) = self.max_bytes {
            config.max_bytes = max_bytes;
        }

        Ok(config)
    }

    /// Raw request payload, from `--request` or built from positional URLs
    pub fn request_body(&self) -> std::io::Result<Vec<u8>> {
        match self.request.as_deref() {
            Some("-") => {
                let mut body = Vec::new();
                std::io::stdin().read_to_end(&mut body)?;
                Ok(body)
            }
            Some(path) => std::fs::read(path),
            None => Ok(json!({ "urls": self.urls }).to_string().into_bytes()),
        }
    }
}
