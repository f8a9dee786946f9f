//! Image Store - Retrieval Seam for Packaging
//!
//! The packager fetches through this trait so callers can swap the
//! HTTP client for an in-memory double. The pipeline only ever reads;
//! uploads belong to the surrounding application.

use async_trait::async_trait;
use thiserror::Error;

/// Raw bytes of a fetched image plus the content type the source
/// reported, used to pick the archive filename extension.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Error)]
#[error("image fetch failed for {url}: {reason}")]
pub struct ImageFetchError {
    pub url: String,
    pub reason: String,
}

impl ImageFetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { url: url.into(), reason: reason.into() }
    }
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, ImageFetchError>;
}

/// Production store over a shared reqwest client.
pub struct HttpImageStore {
    client: reqwest::Client,
}

impl HttpImageStore {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpImageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, ImageFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageFetchError::new(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::new(url, format!("status {}", status)));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageFetchError::new(url, e.to_string()))?;

        Ok(FetchedImage { bytes: bytes.to_vec(), content_type })
    }
}
