//! Keyword image lookups for transfer cards.

use crate::errors::ClientError;
use async_trait::async_trait;
use futures::future::join_all;
use ledgerlogic_core::TransferRecord;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Default Giphy search endpoint.
pub const GIPHY_SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";

/// Finds an image for a transfer keyword.
#[async_trait]
pub trait KeywordImages: Send + Sync {
    /// Returns the image URL for `keyword`, if one exists.
    async fn image_for(&self, keyword: &str) -> Result<Option<String>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<Gif>,
}

#[derive(Debug, Deserialize)]
struct Gif {
    images: GifImages,
}

#[derive(Debug, Deserialize)]
struct GifImages {
    downsized_medium: Option<GifRendition>,
    original: Option<GifRendition>,
}

#[derive(Debug, Deserialize)]
struct GifRendition {
    url: String,
}

/// Extracts the first result's image URL from a Giphy search response.
pub fn parse_search_response(body: &str) -> Result<Option<String>, ClientError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Image(e.to_string()))?;

    Ok(response.data.into_iter().next().and_then(|gif| {
        gif.images
            .downsized_medium
            .or(gif.images.original)
            .map(|rendition| rendition.url)
    }))
}

/// Image lookups against the Giphy search API.
#[derive(Clone, Debug)]
pub struct GiphyClient {
    /// HTTP client
    http: reqwest::Client,
    /// Search endpoint
    endpoint: String,
    /// API key
    api_key: String,
}

impl GiphyClient {
    /// Creates a client for the public Giphy endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(GIPHY_SEARCH_URL, api_key)
    }

    /// Creates a client for a custom search endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl KeywordImages for GiphyClient {
    async fn image_for(&self, keyword: &str) -> Result<Option<String>, ClientError> {
        // Giphy matches best on the keyword without spaces.
        let query: String = keyword.split_whitespace().collect();
        if query.is_empty() {
            return Ok(None);
        }

        let body = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", query.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let url = parse_search_response(&body)?;
        debug!("Image for keyword '{}': {:?}", keyword, url);
        Ok(url)
    }
}

/// Looks up one image per distinct keyword in `transfers`.
///
/// Failed lookups are logged and left out of the result.
pub async fn resolve_images(
    images: &dyn KeywordImages,
    transfers: &[TransferRecord],
) -> HashMap<String, String> {
    let keywords: BTreeSet<&str> = transfers
        .iter()
        .map(|t| t.keyword.as_str())
        .filter(|k| !k.trim().is_empty())
        .collect();

    let lookups = keywords.into_iter().map(|keyword| async move {
        match images.image_for(keyword).await {
            Ok(url) => url.map(|url| (keyword.to_string(), url)),
            Err(e) => {
                warn!("Image lookup for '{}' failed: {}", keyword, e);
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}
