//! JSON request/response boundary around a [`Batch`].
//!
//! Input is `{"urls": [...]}`; a payload that is not valid JSON, or has no
//! `urls` field, is treated as an empty list. Output is either
//! `{"sites": [...]}` or `{"error": "..."}` with a status classification.

use crate::batch::Batch;
use crate::fetchers::Fetcher;
use serde_json::{Value, json};

/// Headers attached to every response: JSON, never cached
pub const RESPONSE_HEADERS: [(&str, &str); 2] = [
    ("content-type", "application/json"),
    ("cache-control", "no-cache"),
];

/// Caller-supplied extraction request
#[derive(Debug, Clone, Default)]
pub struct ExtractRequest {
    /// Candidate URLs, kept untyped so bad entries can be skipped individually
    pub urls: Value,
}

impl ExtractRequest {
    /// Parse a request body, falling back to an empty request
    ///
    /// Only a JSON object carries `urls`; any other JSON value has none.
    pub fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => Self {
                urls: fields.remove("urls").unwrap_or_default(),
            },
            Ok(_) => {
                ::log::debug!("Request payload is not a JSON object, treating as empty");
                Self::default()
            }
            Err(e) => {
                ::log::debug!("Malformed request payload, treating as empty: {}", e);
                Self::default()
            }
        }
    }
}

/// Status plus JSON body, ready to hand to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractResponse {
    pub status: u16,
    pub body: Value,
}

impl ExtractResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &'static [(&'static str, &'static str)] {
        &RESPONSE_HEADERS
    }
}

/// Run one request through the batch and classify the outcome
pub async fn handle_request<F: Fetcher + Sync>(batch: &Batch<F>, body: &[u8]) -> ExtractResponse {
    let request = ExtractRequest::from_json(body);

    match batch.run(&request.urls).await {
        Ok(sites) => ExtractResponse {
            status: 200,
            body: json!({ "sites": sites }),
        },
        Err(e) => {
            ::log::warn!("Extraction request rejected: {}", e);
            ExtractResponse {
                status: e.status_code(),
                body: e.to_body(),
            }
        }
    }
}
