// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response types

use serde::{Deserialize, Serialize};

use crate::genai::GeneratedImage;

/// Response from POST /api/image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub success: bool,
    pub image: ImagePayload,
}

/// The generated image in the three forms clients consume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    /// Base64-encoded image bytes
    pub data: String,
    pub mime_type: String,
    /// data: URI, directly usable as an img src
    pub data_url: String,
}

impl From<GeneratedImage> for ImagePayload {
    fn from(image: GeneratedImage) -> Self {
        Self {
            data: image.base64(),
            data_url: image.data_url(),
            mime_type: image.media_type,
        }
    }
}
