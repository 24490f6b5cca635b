// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page generation endpoint handler

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::{debug, error, warn};

use super::request::GenerateRequest;
use super::response::GenerateResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::auth::session_from_headers;
use crate::credentials::ProviderKind;
use crate::genai::{build_landing_page_prompt, extract_json_block, GenAiError};

/// POST /api/generate - generate a landing page document
///
/// Unlike the other generation endpoints, failures here echo provider
/// detail in the `details` field of the error envelope.
pub async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request: GenerateRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    if let Err(e) = request.validate() {
        warn!("generate validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    debug!(
        "generate request: topic={}, prompt_len={}",
        request.topic,
        request.prompt.len()
    );

    let identity = session_from_headers(&headers, &state.config.session_secret);
    let credential = state
        .credentials
        .resolve(
            identity.as_ref().map(|s| s.user_id.as_str()),
            request.user_api_key.as_deref(),
            ProviderKind::TextGeneration,
        )
        .await;

    let prompt = build_landing_page_prompt(&request.topic, &request.prompt, &request.style());
    let raw = state
        .text_gen
        .generate_text(&state.config.text_model, &prompt, &credential)
        .await
        .map_err(|e| {
            error!("landing page generation failed: {}", e);
            ApiError::Generation {
                message: "Failed to generate landing page".to_string(),
                details: Some(e.to_string()),
            }
        })?;

    let data = extract_json_block(&raw).map_err(|e| {
        if let GenAiError::Parse { ref raw } = e {
            debug!("unparseable landing page output: {}", raw);
        }
        error!("landing page generation failed: {}", e);
        ApiError::Generation {
            message: "Failed to generate landing page".to_string(),
            details: Some(e.to_string()),
        }
    })?;

    Ok(Json(GenerateResponse {
        success: true,
        data,
    }))
}
