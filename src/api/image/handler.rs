// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::{debug, error};

use super::request::ImageRequest;
use super::response::{ImagePayload, ImageResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::auth::session_from_headers;
use crate::credentials::ProviderKind;

/// POST /api/image - generate an image for a page section
///
/// There is no request validation here: every field is optional and
/// shape hints go to the provider as-is. Failures are a generic 500;
/// provider detail is logged, not echoed.
pub async fn generate_image_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ImageResponse>, ApiError> {
    let request: ImageRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    let identity = session_from_headers(&headers, &state.config.session_secret);
    let credential = state
        .credentials
        .resolve(
            identity.as_ref().map(|s| s.user_id.as_str()),
            request.api_key.as_deref(),
            ProviderKind::ImageGeneration,
        )
        .await;

    let model = request
        .model
        .as_deref()
        .unwrap_or(&state.config.image_model);
    let prompt = request.effective_prompt();

    debug!("image request: model={}, prompt_len={}", model, prompt.len());

    let image = state
        .image_gen
        .generate_image(model, &prompt, &request.options(), &credential)
        .await
        .map_err(|e| {
            error!("image generation failed: {}", e);
            ApiError::Internal("Failed to generate image".to_string())
        })?;

    Ok(Json(ImageResponse {
        success: true,
        image: ImagePayload::from(image),
    }))
}
