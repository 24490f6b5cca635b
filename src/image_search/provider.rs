// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image provider trait definition

use async_trait::async_trait;

use super::types::{ImageSearchError, StockImage};

/// Trait for stock image providers
///
/// Multiple providers can be configured with automatic failover.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Search for stock images
    ///
    /// # Arguments
    /// * `query` - The search query string
    /// * `count` - Maximum number of images to return
    /// * `orientation` - Optional orientation hint, passed through to the
    ///   provider uninterpreted
    async fn search(
        &self,
        query: &str,
        count: usize,
        orientation: Option<&str>,
    ) -> Result<Vec<StockImage>, ImageSearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider is available (has API key, etc.)
    fn is_available(&self) -> bool;

    /// Get provider priority (lower = preferred)
    fn priority(&self) -> u8 {
        100
    }
}
