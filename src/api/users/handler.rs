// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User account endpoint handlers

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::warn;

use super::request::UpdateSettingsRequest;
use super::response::{HasApiKeyResponse, UpdateSettingsResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::auth::{session_from_headers, Session};
use crate::models::UserProfile;

fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Session, ApiError> {
    session_from_headers(headers, &state.config.session_secret)
        .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))
}

/// GET /api/users/me - the caller's profile
pub async fn me_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, ApiError> {
    let session = require_session(&state, &headers)?;
    let profile = state.users.get_profile(&session.user_id).await?;
    Ok(Json(profile))
}

/// GET /api/users/has-api-key - whether the caller has a usable stored key
///
/// Never fails: anonymous callers, unknown users and store outages all
/// answer `false`.
pub async fn has_api_key_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<HasApiKeyResponse> {
    let has_api_key = match session_from_headers(&headers, &state.config.session_secret) {
        Some(session) => match state.users.get_settings(&session.user_id).await {
            Ok(settings) => settings.active_key().is_some(),
            Err(e) => {
                warn!("has-api-key settings lookup failed: {}", e);
                false
            }
        },
        None => false,
    };
    Json(HasApiKeyResponse { has_api_key })
}

/// PUT /api/users/settings - partial update of provider settings
pub async fn update_settings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<UpdateSettingsResponse>, ApiError> {
    let session = require_session(&state, &headers)?;
    let request: UpdateSettingsRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    let stored = state.users.get_settings(&session.user_id).await?;
    let updated = request.apply_to(stored);
    state
        .users
        .update_settings(&session.user_id, updated)
        .await?;

    Ok(Json(UpdateSettingsResponse { success: true }))
}
