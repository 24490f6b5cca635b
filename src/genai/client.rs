// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini generateContent client
//!
//! One synchronous call per generation, no retry and no streaming. Text
//! and image generation share the endpoint; image requests opt in via
//! `generationConfig.responseModalities` and receive base64 bytes in an
//! `inlineData` part.
//!
//! Endpoint: POST {base}/v1beta/models/{model}:generateContent
//! Auth:     x-goog-api-key header

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::credentials::ProviderCredential;

use super::types::{GenAiError, GeneratedImage, ImageGenOptions, ImageGeneration, TextGeneration};

const REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_IMAGE_MIME: &str = "image/png";

pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn call(
        &self,
        model: &str,
        credential: &ProviderCredential,
        request: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, GenAiError> {
        if credential.is_empty() {
            return Err(GenAiError::ProviderAuth {
                reason: format!("no {} API key available", credential.kind.as_str()),
            });
        }

        debug!(
            "calling gemini model {} with key from {}",
            model, credential.source
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &credential.secret)
            .json(request)
            .send()
            .await
            .map_err(|e| GenAiError::Generation {
                message: e.to_string(),
            })?;

        let status = response.status();

        if status == 401 || status == 403 {
            let message = response.text().await.unwrap_or_default();
            return Err(GenAiError::ProviderAuth { reason: message });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenAiError::Generation {
                message: format!("provider returned {}: {}", status.as_u16(), message),
            });
        }

        response.json().await.map_err(|e| GenAiError::Generation {
            message: format!("invalid provider response: {}", e),
        })
    }
}

#[async_trait]
impl TextGeneration for GeminiClient {
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        credential: &ProviderCredential,
    ) -> Result<String, GenAiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
        };

        let data = self.call(model, credential, &request).await?;
        let text = data.first_text();
        if text.is_empty() {
            return Err(GenAiError::Generation {
                message: "provider returned no text".to_string(),
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    async fn generate_image(
        &self,
        model: &str,
        prompt: &str,
        options: &ImageGenOptions,
        credential: &ProviderCredential,
    ) -> Result<GeneratedImage, GenAiError> {
        // Shape hints pass through uninterpreted; the provider decides
        // which values it accepts.
        let image_config =
            if options.aspect_ratio.is_some() || options.image_size.is_some() {
                Some(ImageConfig {
                    aspect_ratio: options.aspect_ratio.as_deref(),
                    image_size: options.image_size.as_deref(),
                })
            } else {
                None
            };

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
                image_config,
            }),
        };

        let data = self.call(model, credential, &request).await?;
        let inline = data.first_inline_data().ok_or_else(|| GenAiError::Generation {
            message: "provider returned no image data".to_string(),
        })?;

        let bytes = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| GenAiError::Generation {
                message: format!("invalid image payload: {}", e),
            })?;

        let media_type = match inline.mime_type.as_deref() {
            Some(mime) if !mime.is_empty() => mime.to_string(),
            _ => DEFAULT_IMAGE_MIME.to_string(),
        };

        Ok(GeneratedImage { bytes, media_type })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<&'static str>,
    #[serde(rename = "imageConfig", skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct ImageConfig<'a> {
    #[serde(rename = "aspectRatio", skip_serializing_if = "Option::is_none")]
    aspect_ratio: Option<&'a str>,
    #[serde(rename = "imageSize", skip_serializing_if = "Option::is_none")]
    image_size: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// First inline payload of the first candidate
    fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
    data: String,
}
