// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image search orchestration
//!
//! Tries configured providers in priority order and fails over on error.

use tracing::{debug, info, warn};

use super::pexels::PexelsProvider;
use super::provider::ImageProvider;
use super::types::{ImageSearchError, StockImage};

pub struct ImageSearchService {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl ImageSearchService {
    /// Create a service from configuration. Providers with no key are
    /// not registered at all.
    pub fn new(pexels_api_key: Option<String>) -> Self {
        let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

        if let Some(api_key) = pexels_api_key {
            if !api_key.is_empty() {
                providers.push(Box::new(PexelsProvider::new(api_key)));
                debug!("Pexels image provider enabled");
            }
        }

        providers.sort_by_key(|p| p.priority());
        Self { providers }
    }

    pub fn with_providers(mut providers: Vec<Box<dyn ImageProvider>>) -> Self {
        providers.sort_by_key(|p| p.priority());
        Self { providers }
    }

    /// Search providers in priority order, failing over on any error.
    /// The last provider's error is surfaced when all of them fail.
    pub async fn search(
        &self,
        query: &str,
        count: usize,
        orientation: Option<&str>,
    ) -> Result<Vec<StockImage>, ImageSearchError> {
        let mut last_error = None;

        for provider in &self.providers {
            if !provider.is_available() {
                continue;
            }

            debug!("Trying image provider: {}", provider.name());
            match provider.search(query, count, orientation).await {
                Ok(images) => {
                    info!(
                        "Image search complete: {} images from {}",
                        images.len(),
                        provider.name()
                    );
                    return Ok(images);
                }
                Err(e) => {
                    warn!("Image provider {} failed: {}", provider.name(), e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ImageSearchError::ProviderUnavailable {
            provider: "all".to_string(),
        }))
    }
}
