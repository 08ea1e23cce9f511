use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::extractor::SiteExtractor;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::filter;
use crate::results::SiteExtraction;
use futures::future::join_all;
use serde_json::Value;

/// Validates a URL list and extracts the accepted pages concurrently
pub struct Batch<F> {
    fetcher: F,
    config: ExtractorConfig,
}

impl Batch<HttpFetcher> {
    /// Create a batch runner backed by a real HTTP client
    pub fn new(config: ExtractorConfig) -> Result<Self, reqwest::Error> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: Fetcher + Sync> Batch<F> {
    /// Create a batch runner with a custom fetcher
    pub fn with_fetcher(fetcher: F, config: ExtractorConfig) -> Self {
        Self { fetcher, config }
    }

    /// Extract every usable URL in `urls`, which must be a JSON array
    ///
    /// Non-string entries and non-`http(s)` URLs are skipped; at most
    /// `max_urls` of the rest are extracted. Pages that fail are dropped from
    /// the result; only a batch where all of them fail is an error.
    pub async fn run(&self, urls: &Value) -> Result<Vec<SiteExtraction>, ExtractError> {
        let candidates = match urls.as_array() {
            Some(list) if !list.is_empty() => list,
            _ => return Err(ExtractError::no_urls()),
        };

        let accepted = filter::validate(candidates, self.config.max_urls);
        if accepted.is_empty() {
            return Err(ExtractError::invalid_urls());
        }

        ::log::info!(
            "Extracting {} of {} candidate URLs",
            accepted.len(),
            candidates.len()
        );

        let extractor = SiteExtractor::new(&self.fetcher, &self.config);
        let results = join_all(accepted.iter().map(|url| extractor.extract(url))).await;

        let sites = results.into_iter().flatten().collect::<Vec<_>>();
        if sites.is_empty() {
            ::log::error!("All {} URLs failed to extract", accepted.len());
            return Err(ExtractError::all_failed());
        }

        ::log::info!(
            "Batch complete: {} of {} URLs extracted",
            sites.len(),
            accepted.len()
        );
        Ok(sites)
    }

    /// Convenience wrapper over [`Batch::run`] for a list of strings
    pub async fn run_urls<S: AsRef<str>>(
        &self,
        urls: &[S],
    ) -> Result<Vec<SiteExtraction>, ExtractError> {
        let urls = Value::Array(
            urls.iter()
                .map(|u| Value::String(u.as_ref().to_string()))
                .collect(),
        );
        self.run(&urls).await
    }
}
