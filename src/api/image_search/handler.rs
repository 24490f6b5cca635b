// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stock image search endpoint handler

use axum::extract::{Query, State};
use axum::Json;
use tracing::{debug, error, warn};

use super::request::ImageSearchParams;
use super::response::ImageSearchResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::image_search::ImageSearchError;

/// GET /api/images/search - search stock photos for a page
pub async fn search_images_handler(
    State(state): State<AppState>,
    Query(params): Query<ImageSearchParams>,
) -> Result<Json<ImageSearchResponse>, ApiError> {
    if let Err(e) = params.validate() {
        warn!("image search validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    // validate() guarantees a query is present
    let query = params.effective_query().unwrap_or_default().to_string();
    debug!("image search: query={}, count={}", query, params.count());

    let images = state
        .image_search
        .search(&query, params.count(), params.orientation.as_deref())
        .await
        .map_err(|e| match e {
            ImageSearchError::RateLimited { retry_after_secs } => {
                warn!("image search rate limited");
                ApiError::RateLimited { retry_after_secs }
            }
            other => {
                error!("image search failed: {}", other);
                ApiError::Internal("Image search failed".to_string())
            }
        })?;

    Ok(Json(ImageSearchResponse {
        success: true,
        images,
        query,
    }))
}
