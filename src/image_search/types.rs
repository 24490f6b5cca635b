// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for stock image search

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single stock photo result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockImage {
    /// Provider-scoped photo id
    pub id: String,
    /// Direct URL of a display-sized rendition
    pub url: String,
    /// URL of a small preview rendition
    pub thumbnail_url: String,
    /// Attribution: photographer name
    pub photographer: String,
    /// Attribution: photographer profile URL
    pub photographer_url: String,
    /// Alt text if the provider supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Source provider (e.g., "pexels")
    pub source: String,
}

/// Errors that can occur during image search
#[derive(Debug, Error)]
pub enum ImageSearchError {
    /// Rate limited by the image provider
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// API error from the image provider
    #[error("Image search API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Request timed out
    #[error("Image search timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// No provider could serve the query
    #[error("Provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    /// No API key configured for the provider
    #[error("No API key configured for {provider}")]
    NoApiKey { provider: String },
}
