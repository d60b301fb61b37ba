//! Random GIF lookup against the GIPHY API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::constants::{GIF_RATING, GIF_TAG, GIPHY_BASE_URL};
use crate::error::LookupError;

#[async_trait]
pub trait GifLookup: Send + Sync {
    /// Returns the URL of a random motivational GIF.
    async fn random_gif(&self) -> Result<String, LookupError>;
}

#[derive(Deserialize)]
struct RandomGifResponse {
    data: GifData,
}

#[derive(Deserialize)]
struct GifData {
    images: GifImages,
}

#[derive(Deserialize)]
struct GifImages {
    original: GifRendition,
}

#[derive(Deserialize)]
struct GifRendition {
    url: String,
}

#[derive(Clone)]
pub struct GiphyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GiphyClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: GIPHY_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GifLookup for GiphyClient {
    async fn random_gif(&self) -> Result<String, LookupError> {
        let endpoint = format!("{}/v1/gifs/random", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&endpoint)
            .query(&[
                ("tag", GIF_TAG),
                ("rating", GIF_RATING),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body: RandomGifResponse = response.json().await?;
        let url = body.data.images.original.url;
        if url.trim().is_empty() {
            return Err(LookupError::Malformed("empty image url".to_string()));
        }
        debug!(target = "giphy", %url, "random gif fetched");
        Ok(url)
    }
}
