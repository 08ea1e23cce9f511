//! HTTP front end exposing `POST /extract`.

use crate::batch::Batch;
use crate::fetchers::HttpFetcher;
use crate::request::handle_request;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use std::error::Error;
use std::sync::Arc;

/// Build the router for the extraction endpoint
pub fn router(batch: Arc<Batch<HttpFetcher>>) -> Router {
    Router::new()
        .route("/extract", post(extract_handler))
        .with_state(batch)
}

async fn extract_handler(
    State(batch): State<Arc<Batch<HttpFetcher>>>,
    body: Bytes,
) -> impl IntoResponse {
    let response = handle_request(batch.as_ref(), &body).await;
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    for (name, value) in response.headers() {
        headers.insert(*name, HeaderValue::from_static(*value));
    }

    (status, headers, response.body.to_string())
}

/// Serve the extraction endpoint on `addr` until the process exits
pub async fn serve(addr: &str, batch: Batch<HttpFetcher>) -> Result<(), Box<dyn Error>> {
    let app = router(Arc::new(batch));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    ::log::info!("Listening on http://{}/extract", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
