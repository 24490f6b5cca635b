// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content distribution endpoint handler

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::{debug, error, warn};

use super::request::DistributeRequest;
use super::response::DistributeResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::auth::session_from_headers;
use crate::credentials::ProviderKind;
use crate::genai::{build_distribution_prompt, extract_json_block, normalize_answers, GenAiError};

/// POST /api/distribute - answer a question list from a source document
///
/// Pipeline:
/// 1. Validate request (no provider call on failure)
/// 2. Resolve the text-generation credential
/// 3. Build the distribution prompt and call the provider
/// 4. Extract the JSON payload and normalize the answer count
pub async fn distribute_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<DistributeResponse>, ApiError> {
    let request: DistributeRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    if let Err(e) = request.validate() {
        warn!("distribute validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    debug!(
        "distribute request: text_len={}, questions={}",
        request.text.len(),
        request.questions.len()
    );

    let identity = session_from_headers(&headers, &state.config.session_secret);
    let credential = state
        .credentials
        .resolve(
            identity.as_ref().map(|s| s.user_id.as_str()),
            None,
            ProviderKind::TextGeneration,
        )
        .await;

    let prompt = build_distribution_prompt(&request.text, &request.questions);
    let raw = state
        .text_gen
        .generate_text(&state.config.text_model, &prompt, &credential)
        .await
        .map_err(|e| {
            error!("content distribution failed: {}", e);
            ApiError::Internal("content distribution failed".to_string())
        })?;

    let parsed = extract_json_block(&raw).map_err(|e| {
        if let GenAiError::Parse { ref raw } = e {
            debug!("unparseable distribution output: {}", raw);
        }
        error!("content distribution failed: {}", e);
        ApiError::Internal("content distribution failed".to_string())
    })?;

    let answers = normalize_answers(parsed.get("answers"), request.questions.len());

    Ok(Json(DistributeResponse {
        success: true,
        answers,
    }))
}
