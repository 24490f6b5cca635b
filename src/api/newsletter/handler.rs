// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Newsletter endpoint handlers

use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

use super::request::SubscribeRequest;
use super::response::{NewsletterCountResponse, SubscribeResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::store::SubscribeOutcome;

/// POST /api/newsletter - subscribe an email address
///
/// Idempotent from the caller's view: a duplicate address is a success
/// with a distinct message, never an error, and never a second row.
pub async fn subscribe_handler(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let request: SubscribeRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    if let Err(e) = request.validate() {
        warn!("newsletter validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    let email = request.normalized_email();
    let outcome = state.newsletter.subscribe(&email).await?;

    let message = match outcome {
        SubscribeOutcome::Created => {
            info!("newsletter subscriber added");
            "Subscribed to the newsletter".to_string()
        }
        SubscribeOutcome::AlreadySubscribed => "You are already subscribed".to_string(),
    };

    Ok(Json(SubscribeResponse {
        success: true,
        message,
    }))
}

/// GET /api/newsletter - subscriber count
pub async fn newsletter_count_handler(
    State(state): State<AppState>,
) -> Result<Json<NewsletterCountResponse>, ApiError> {
    let count = state.newsletter.count().await?;
    Ok(Json(NewsletterCountResponse { count }))
}
