// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page generation request types and validation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::genai::PageStyle;

const MIN_PROMPT_CHARS: usize = 10;

/// Request for POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Page category, e.g. "saas" or "restaurant"
    pub topic: String,

    /// Free-text brief describing the page to generate
    pub prompt: String,

    /// Writing tone, passed to the model verbatim
    #[serde(default)]
    pub tone: Option<String>,

    /// Section name to emoji preference
    #[serde(default)]
    pub emojis: Option<BTreeMap<String, String>>,

    /// Exact call-to-action label to use
    #[serde(default)]
    pub cta_button_text: Option<String>,

    /// Per-request provider key override
    #[serde(default)]
    pub user_api_key: Option<String>,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("topic must not be empty".to_string());
        }
        if self.prompt.trim().chars().count() < MIN_PROMPT_CHARS {
            return Err(format!(
                "prompt must be at least {} characters",
                MIN_PROMPT_CHARS
            ));
        }
        Ok(())
    }

    pub fn style(&self) -> PageStyle {
        PageStyle {
            tone: self.tone.clone(),
            emojis: self.emojis.clone().unwrap_or_default(),
            cta_button_text: self.cta_button_text.clone(),
        }
    }
}
