//! Fetcher
//!
//! One GET against the list endpoint. No retries, no timeouts beyond the
//! transport's own.

use async_trait::async_trait;

use crate::cancel::CancelToken;
use crate::error::FetchError;
use crate::models::Item;

/// Raw response handed back by an [`HttpClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam. Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Production client; uses the browser's `fetch` on wasm32
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Load the post list.
///
/// `Ok(None)` means the server answered 2xx with a JSON `null` body.
pub async fn fetch_items<C>(
    client: &C,
    url: &str,
    cancel: &CancelToken,
) -> Result<Option<Vec<Item>>, FetchError>
where
    C: HttpClient + ?Sized,
{
    let result = request_items(client, url.trim(), cancel).await;
    match &result {
        Ok(Some(items)) => log::info!("Loaded {} items", items.len()),
        Ok(None) => log::info!("Endpoint returned no data"),
        Err(FetchError::Cancelled) => log::debug!("Load discarded after teardown"),
        Err(e) => log::error!("API error: {}", e),
    }
    result
}

async fn request_items<C>(
    client: &C,
    url: &str,
    cancel: &CancelToken,
) -> Result<Option<Vec<Item>>, FetchError>
where
    C: HttpClient + ?Sized,
{
    if cancel.is_cancelled() {
        return Err(FetchError::Cancelled);
    }
    log::debug!("GET {}", url);
    let response = client.get(url).await?;
    if cancel.is_cancelled() {
        return Err(FetchError::Cancelled);
    }
    if !response.is_success() {
        return Err(FetchError::HttpStatus(response.status));
    }
    Ok(serde_json::from_str(&response.body)?)
}
