//! Image fetching from the upstream provider

use crate::error::{ProviderError, Result};
use reqwest::Client;
use tracing::{debug, warn};

/// HTTP client for an image-by-key provider
#[derive(Debug, Clone)]
pub struct ImageProvider {
    client: Client,
    base_url: String,
}

impl ImageProvider {
    /// Public provider of HTTP status code cat pictures
    pub const DEFAULT_BASE_URL: &'static str = "https://http.cat";

    /// Create a client for the provider at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the image for `key`
    pub fn image_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Fetch the image for `key` as raw bytes.
    ///
    /// Any non-success status is an error. The request has no timeout and is
    /// never retried.
    pub async fn fetch_image(&self, key: &str) -> Result<Vec<u8>> {
        let url = self.image_url(key);
        debug!(url = %url, "Fetching image from provider");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Provider refused image");
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let data = response.bytes().await?.to_vec();
        debug!(url = %url, size = data.len(), "Fetched image from provider");

        Ok(data)
    }
}

impl Default for ImageProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
