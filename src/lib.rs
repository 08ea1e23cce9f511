// Re-export modules
pub mod batch;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod request;
pub mod results;
pub mod sanitize;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use batch::Batch;
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::SiteExtractor;
pub use fetchers::{Fetcher, HttpFetcher};
pub use request::{ExtractRequest, ExtractResponse, handle_request};
pub use results::{STYLESHEET_SEPARATOR, SiteExtraction};
pub use sanitize::sanitize;
