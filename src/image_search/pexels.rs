// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pexels stock photo provider
//!
//! https://www.pexels.com/api/documentation/
//! Authenticated with a plain API key in the Authorization header.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::provider::ImageProvider;
use super::types::{ImageSearchError, StockImage};

const PEXELS_API_URL: &str = "https://api.pexels.com/v1/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;
// Pexels caps per_page at 80
const MAX_PER_PAGE: usize = 80;

pub struct PexelsProvider {
    api_key: String,
    client: Client,
}

impl PexelsProvider {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { api_key, client }
    }
}

#[async_trait]
impl ImageProvider for PexelsProvider {
    async fn search(
        &self,
        query: &str,
        count: usize,
        orientation: Option<&str>,
    ) -> Result<Vec<StockImage>, ImageSearchError> {
        let per_page = count.min(MAX_PER_PAGE).to_string();
        let mut params = vec![("query", query), ("per_page", &per_page)];
        if let Some(orientation) = orientation {
            params.push(("orientation", orientation));
        }

        let response = self
            .client
            .get(PEXELS_API_URL)
            .header("Authorization", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageSearchError::Timeout {
                        timeout_ms: REQUEST_TIMEOUT_SECS * 1000,
                    }
                } else {
                    ImageSearchError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status == 429 {
            return Err(ImageSearchError::RateLimited {
                retry_after_secs: 60,
            });
        }

        if status == 401 || status == 403 {
            return Err(ImageSearchError::NoApiKey {
                provider: "pexels".to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ImageSearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: PexelsResponse =
            response.json().await.map_err(|e| ImageSearchError::ApiError {
                status: 0,
                message: format!("JSON parse error: {}", e),
            })?;

        Ok(data
            .photos
            .into_iter()
            .map(|p| StockImage {
                id: p.id.to_string(),
                url: p.src.large,
                thumbnail_url: p.src.medium,
                photographer: p.photographer,
                photographer_url: p.photographer_url,
                alt: p.alt.filter(|a| !a.is_empty()),
                width: p.width,
                height: p.height,
                source: "pexels".to_string(),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "pexels"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn priority(&self) -> u8 {
        10 // Preferred provider
    }
}

#[derive(Debug, serde::Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, serde::Deserialize)]
struct PexelsPhoto {
    id: u64,
    width: u32,
    height: u32,
    photographer: String,
    photographer_url: String,
    alt: Option<String>,
    src: PexelsSrc,
}

#[derive(Debug, serde::Deserialize)]
struct PexelsSrc {
    large: String,
    medium: String,
}
