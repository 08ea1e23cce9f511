use crate::config::ExtractorConfig;
use crate::fetchers::Fetcher;
use crate::filter;
use crate::parsers::Parser;
use crate::results::{STYLESHEET_SEPARATOR, SiteExtraction};
use crate::sanitize::sanitize;
use crate::utils::truncate_to_bytes;
use futures::future::join_all;
use url::Url;

/// Runs fetch → sanitize → parse → stylesheet retrieval for one page
pub struct SiteExtractor<'a, F> {
    fetcher: &'a F,
    config: &'a ExtractorConfig,
}

impl<'a, F: Fetcher + Sync> SiteExtractor<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a ExtractorConfig) -> Self {
        Self { fetcher, config }
    }

    /// Extract one page
    ///
    /// Returns `None` only when the page itself cannot be fetched. Every later
    /// step degrades to an empty field instead of failing.
    pub async fn extract(&self, url: &str) -> Option<SiteExtraction> {
        let worker_start = std::time::Instant::now();
        let base = filter::parse_fetchable(url)?;

        let raw = match self.fetcher.fetch(&base).await {
            Some(body) if !body.is_empty() => body,
            Some(_) => {
                ::log::warn!("Empty response body from {}", url);
                return None;
            }
            None => return None,
        };

        let html = sanitize(&raw, self.config.max_bytes);
        drop(raw);

        let page = Parser::parse_page(&html, self.config);
        let css = self.fetch_stylesheets(&base, &page.stylesheets).await;

        ::log::info!(
            "Extracted {} ({} bytes html, {} bytes css) in {:.2} seconds",
            url,
            html.len(),
            css.len(),
            worker_start.elapsed().as_secs_f64()
        );

        Some(SiteExtraction {
            url: url.to_string(),
            title: page.title,
            meta_description: page.meta_description,
            html,
            css,
            text_sample: page.text_sample,
        })
    }

    /// Fetches every stylesheet concurrently and joins the bodies in link order
    async fn fetch_stylesheets(&self, base: &Url, hrefs: &[String]) -> String {
        // join_all yields results in input order, whatever order they complete in
        let bodies = join_all(hrefs.iter().map(|href| self.fetch_stylesheet(base, href))).await;

        bodies
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(STYLESHEET_SEPARATOR)
    }

    async fn fetch_stylesheet(&self, base: &Url, href: &str) -> Option<String> {
        let Some(url) = filter::resolve(base, href) else {
            ::log::debug!("Skipping stylesheet {:?}: not resolvable", href);
            return None;
        };

        match self.fetcher.fetch(&url).await {
            Some(mut body) if !body.is_empty() => {
                truncate_to_bytes(&mut body, self.config.stylesheet_cap());
                Some(body)
            }
            _ => {
                ::log::debug!("Skipping stylesheet {}: no content", url);
                None
            }
        }
    }
}
