// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request types
//!
//! Every field is optional: an empty body generates a generic hero
//! image. Model, aspect ratio and size are passed to the provider
//! uninterpreted; the provider decides what it accepts.

use serde::{Deserialize, Serialize};

use crate::genai::{build_image_prompt, ImageGenOptions};

/// Request for POST /api/image
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    /// Full prompt; when set, section/context/style are ignored
    #[serde(default)]
    pub prompt: Option<String>,

    /// Page section the image is for, defaults to "hero"
    #[serde(default)]
    pub section_type: Option<String>,

    /// What the page is about
    #[serde(default)]
    pub context: Option<String>,

    /// Style keyword, e.g. "watercolor"
    #[serde(default)]
    pub style: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    /// e.g. "16:9", "1:1", "9:16"
    #[serde(default)]
    pub aspect_ratio: Option<String>,

    /// e.g. "1K"
    #[serde(default)]
    pub image_size: Option<String>,

    /// Per-request provider key override
    #[serde(default)]
    pub api_key: Option<String>,
}

impl ImageRequest {
    /// The prompt to send: explicit prompt wins, otherwise composed from
    /// section, context and style.
    pub fn effective_prompt(&self) -> String {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => prompt.to_string(),
            _ => build_image_prompt(
                self.section_type.as_deref(),
                self.context.as_deref(),
                self.style.as_deref(),
            ),
        }
    }

    pub fn options(&self) -> ImageGenOptions {
        ImageGenOptions {
            aspect_ratio: self.aspect_ratio.clone(),
            image_size: self.image_size.clone(),
        }
    }
}
