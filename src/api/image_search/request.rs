// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stock image search query parameters and validation

use serde::Deserialize;

const DEFAULT_COUNT: usize = 10;
const MAX_COUNT: usize = 30;

/// Query parameters for GET /api/images/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSearchParams {
    /// Free-form search query; wins over `topic` when both are given
    #[serde(default)]
    pub query: Option<String>,

    /// Page topic used as the query when `query` is absent
    #[serde(default)]
    pub topic: Option<String>,

    #[serde(default)]
    pub count: Option<usize>,

    /// Orientation hint, passed to the provider uninterpreted
    #[serde(default)]
    pub orientation: Option<String>,
}

impl ImageSearchParams {
    /// The query to search with: `query` first, then `topic`
    pub fn effective_query(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .or_else(|| {
                self.topic
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
            })
    }

    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.effective_query().is_none() {
            return Err("either query or topic is required".to_string());
        }
        let count = self.count();
        if count == 0 || count > MAX_COUNT {
            return Err(format!("count must be between 1 and {}", MAX_COUNT));
        }
        Ok(())
    }
}
