use std::future::Future;
use url::Url;

/// Single-attempt, fail-soft retrieval of a text resource
///
/// Implementations never surface errors: any failure (status, transport,
/// timeout) is reported as `None`, the absence marker. A `Some` body is
/// already bounded by the implementation's byte cap.
pub trait Fetcher {
    /// Fetch `url` and return its decoded body
    fn fetch(&self, url: &Url) -> impl Future<Output = Option<String>> + Send;
}
