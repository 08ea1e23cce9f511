use serde_json::Value;
use url::Url;

/// Schemes the fetcher is allowed to touch
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Check if a parsed URL uses a fetchable scheme
pub fn is_fetchable(url: &Url) -> bool {
    ALLOWED_SCHEMES.contains(&url.scheme())
}

/// Parse a candidate as an absolute `http`/`https` URL
pub fn parse_fetchable(candidate: &str) -> Option<Url> {
    match Url::parse(candidate) {
        Ok(url) if is_fetchable(&url) => Some(url),
        Ok(url) => {
            ::log::debug!("Rejecting URL with scheme {:?}: {}", url.scheme(), candidate);
            None
        }
        Err(e) => {
            ::log::debug!("Rejecting unparsable URL {:?}: {}", candidate, e);
            None
        }
    }
}

/// Resolve a possibly relative reference against a page URL
///
/// Returns `None` when the reference cannot be resolved or points at a
/// scheme the fetcher must not touch (`data:`, `javascript:` and so on).
pub fn resolve(base: &Url, reference: &str) -> Option<Url> {
    match base.join(reference) {
        Ok(url) if is_fetchable(&url) => Some(url),
        Ok(url) => {
            ::log::debug!("Skipping non-http reference: {}", url.scheme());
            None
        }
        Err(e) => {
            ::log::debug!("Cannot resolve {:?} against {}: {}", reference, base, e);
            None
        }
    }
}

/// Keep the first `max` candidates that are strings parsing as `http`/`https`
/// URLs, in the order received. Entries of other JSON types are skipped.
pub fn validate(candidates: &[Value], max: usize) -> Vec<&str> {
    candidates
        .iter()
        .filter_map(Value::as_str)
        .filter(|raw| parse_fetchable(raw).is_some())
        .take(max)
        .collect()
}
