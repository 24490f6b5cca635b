// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page request types and validation

use serde::{Deserialize, Serialize};

/// Request for POST /api/pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub title: String,
    pub topic: String,
    /// The generated page document, stored as-is
    pub content: serde_json::Value,
}

impl CreatePageRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.topic.trim().is_empty() {
            return Err("topic must not be empty".to_string());
        }
        if self.content.is_null() {
            return Err("content is required".to_string());
        }
        Ok(())
    }
}
