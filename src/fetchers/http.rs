use crate::config::ExtractorConfig;
use crate::fetchers::Fetcher;
use futures::{Stream, StreamExt};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use url::Url;

/// Why a fetch produced no body. Only ever logged.
#[derive(Debug, Error)]
enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Bounded HTTP(S) fetcher backed by a shared reqwest connection pool
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_bytes: usize,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher with the limits from `config`
    pub fn new(config: &ExtractorConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .timeout(config.request_timeout())
            .redirect(Policy::default());

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            max_bytes: config.max_bytes,
            timeout: config.request_timeout(),
        })
    }

    async fn fetch_bounded(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        if response.url() != url {
            ::log::debug!("{} redirected to {}", url, response.url());
        }

        let body = read_capped(response.bytes_stream(), self.max_bytes).await?;

        // Lenient: a multi-byte character cut by the cap becomes U+FFFD
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Option<String> {
        let start = std::time::Instant::now();

        // Dropping the inner future on expiry cancels the in-flight transfer
        match timeout(self.timeout, self.fetch_bounded(url)).await {
            Ok(Ok(body)) => {
                ::log::debug!(
                    "Fetched {} ({} bytes) in {:.2} seconds",
                    url,
                    body.len(),
                    start.elapsed().as_secs_f64()
                );
                Some(body)
            }
            Ok(Err(e)) => {
                ::log::warn!("Failed to fetch {}: {}", url, e);
                None
            }
            Err(_) => {
                ::log::warn!(
                    "Timeout fetching {} after {} ms",
                    url,
                    self.timeout.as_millis()
                );
                None
            }
        }
    }
}

/// Reads a chunked body into memory, stopping once `max_bytes` is reached
///
/// Exceeding the cap is truncation, not failure: the bytes up to the cap are
/// kept and the rest of the stream is never polled. An error from the stream
/// before the cap is reached fails the whole read.
pub async fn read_capped<S, B, E>(stream: S, max_bytes: usize) -> Result<Vec<u8>, E>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let chunk = chunk.as_ref();

        let remaining = max_bytes - buffer.len();
        if chunk.len() > remaining {
            buffer.extend_from_slice(&chunk[..remaining]);
            ::log::debug!("Response body exceeded {} bytes, truncating", max_bytes);
            break;
        }

        buffer.extend_from_slice(chunk);
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn chunks(parts: &[&'static str]) -> impl Stream<Item = Result<&'static [u8], String>> {
        let items: Vec<Result<&'static [u8], String>> =
            parts.iter().map(|p: &&'static str| Ok(p.as_bytes())).collect();
        stream::iter(items)
    }

    #[tokio::test]
    async fn test_read_capped_under_limit() {
        let body = read_capped(chunks(&["abc", "def"]), 10).await.unwrap();
        assert_eq!(body, b"abcdef");
    }

    #[tokio::test]
    async fn test_read_capped_exactly_at_limit() {
        let body = read_capped(chunks(&["abc", "def"]), 6).await.unwrap();
        assert_eq!(body, b"abcdef");
    }

    #[tokio::test]
    async fn test_read_capped_truncates_crossing_chunk() {
        let body = read_capped(chunks(&["abc", "defgh", "ijk"]), 5).await.unwrap();
        assert_eq!(body, b"abcde");
    }

    #[tokio::test]
    async fn test_read_capped_stops_polling_after_cap() {
        // An error after the cap is never observed
        let parts: Vec<Result<&[u8], String>> =
            vec![Ok(&b"abcdef"[..]), Err("connection reset".to_string())];
        let body = read_capped(stream::iter(parts), 4).await.unwrap();
        assert_eq!(body, b"abcd");
    }

    #[tokio::test]
    async fn test_read_capped_error_before_cap() {
        let parts: Vec<Result<&[u8], String>> =
            vec![Ok(&b"ab"[..]), Err("connection reset".to_string())];
        let result = read_capped(stream::iter(parts), 100).await;
        assert_eq!(result, Err("connection reset".to_string()));
    }

    #[test]
    fn test_lossy_decode_at_cut_boundary() {
        let bytes = "aé".as_bytes();
        let decoded = String::from_utf8_lossy(&bytes[..2]);
        assert_eq!(decoded, "a\u{fffd}");
    }
}
