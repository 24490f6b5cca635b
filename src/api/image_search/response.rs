// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stock image search response types

use serde::{Deserialize, Serialize};

use crate::image_search::StockImage;

/// Response from GET /api/images/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSearchResponse {
    pub success: bool,
    pub images: Vec<StockImage>,
    /// The query that was actually searched
    pub query: String,
}
