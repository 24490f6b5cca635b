// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generation pipeline types and errors

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::credentials::ProviderCredential;

/// Errors from the generation pipeline
#[derive(Debug, Error)]
pub enum GenAiError {
    /// Missing or rejected credential. Raised locally for an empty key,
    /// or mapped from the provider's auth status codes.
    #[error("provider rejected credential: {reason}")]
    ProviderAuth { reason: String },

    /// The provider call itself failed (network, non-auth status, or an
    /// answer with no usable content)
    #[error("generation failed: {message}")]
    Generation { message: String },

    /// No structured payload could be recovered from the provider text.
    /// Carries the raw output for diagnostics; Display stays terse.
    #[error("no structured payload in provider output")]
    Parse { raw: String },
}

/// A generated image as returned to the caller. Ephemeral; this service
/// never stores image bytes.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl GeneratedImage {
    pub fn base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.base64())
    }
}

/// Image shape hints, passed through to the provider uninterpreted.
/// The provider is the source of truth for which values it accepts.
#[derive(Debug, Clone, Default)]
pub struct ImageGenOptions {
    pub aspect_ratio: Option<String>,
    pub image_size: Option<String>,
}

#[async_trait]
pub trait TextGeneration: Send + Sync {
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        credential: &ProviderCredential,
    ) -> Result<String, GenAiError>;
}

#[async_trait]
pub trait ImageGeneration: Send + Sync {
    async fn generate_image(
        &self,
        model: &str,
        prompt: &str,
        options: &ImageGenOptions,
        credential: &ProviderCredential,
    ) -> Result<GeneratedImage, GenAiError>;
}
