// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page endpoint handlers

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::CreatePageRequest;
use super::response::{PageListResponse, PageResponse, SubmissionListResponse, SubmitResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::auth::{session_from_headers, Session};
use crate::models::{is_valid_email, slugify, LandingPage, NewPage, SubmissionData};
use crate::store::StoreError;

fn require_session(state: &AppState, headers: &HeaderMap) -> Result<Session, ApiError> {
    session_from_headers(headers, &state.config.session_secret)
        .ok_or_else(|| ApiError::Unauthorized("authentication required".to_string()))
}

/// POST /api/pages - store a generated page for the caller
pub async fn create_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<PageResponse>, ApiError> {
    let session = require_session(&state, &headers)?;
    let request: CreatePageRequest = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    if let Err(e) = request.validate() {
        warn!("create page validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    let page = state
        .pages
        .create(NewPage {
            owner_id: session.user_id,
            title: request.title,
            topic: request.topic,
            content: request.content,
        })
        .await?;

    info!("page {} created", page.id);
    Ok(Json(PageResponse {
        success: true,
        page,
    }))
}

/// GET /api/pages - list the caller's pages
pub async fn list_pages_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PageListResponse>, ApiError> {
    let session = require_session(&state, &headers)?;
    let pages = state.pages.list_for_owner(&session.user_id).await?;
    Ok(Json(PageListResponse {
        success: true,
        pages,
    }))
}

/// Load a page and check the caller owns it
async fn owned_page(state: &AppState, session: &Session, id: Uuid) -> Result<LandingPage, ApiError> {
    let page = state.pages.get_by_id(id).await?;
    if page.owner_id != session.user_id {
        return Err(ApiError::Forbidden("not your page".to_string()));
    }
    Ok(page)
}

/// Derive the slug for a page at publish time. A page that was already
/// published keeps its slug; on a title collision with another page the
/// id disambiguates.
async fn publish_slug(state: &AppState, page: &LandingPage) -> Result<String, ApiError> {
    if let Some(slug) = &page.slug {
        return Ok(slug.clone());
    }

    let candidate = slugify(&page.title);
    match state.pages.get_by_slug(&candidate).await {
        Ok(existing) if existing.id == page.id => Ok(candidate),
        Ok(_) => Ok(format!(
            "{}-{}",
            candidate,
            &page.id.simple().to_string()[..8]
        )),
        Err(StoreError::NotFound(_)) => Ok(candidate),
        Err(other) => Err(other.into()),
    }
}

/// POST /api/pages/:id/publish - make a page publicly reachable
pub async fn publish_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<PageResponse>, ApiError> {
    let session = require_session(&state, &headers)?;
    let page = owned_page(&state, &session, id).await?;

    let slug = publish_slug(&state, &page).await?;
    let page = state.pages.publish(id, &slug).await?;

    info!("page {} published at /p/{}", page.id, slug);
    Ok(Json(PageResponse {
        success: true,
        page,
    }))
}

/// GET /api/p/:slug - public view of a published page
///
/// Unpublished pages are indistinguishable from missing ones.
pub async fn public_page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageResponse>, ApiError> {
    let page = published_page(&state, &slug).await?;
    Ok(Json(PageResponse {
        success: true,
        page,
    }))
}

async fn published_page(state: &AppState, slug: &str) -> Result<LandingPage, ApiError> {
    let page = match state.pages.get_by_slug(slug).await {
        Ok(page) => page,
        Err(StoreError::NotFound(_)) => {
            return Err(ApiError::NotFound("page not found".to_string()))
        }
        Err(other) => return Err(other.into()),
    };
    if !page.published {
        debug!("page {} exists but is not published", page.id);
        return Err(ApiError::NotFound("page not found".to_string()));
    }
    Ok(page)
}

/// POST /api/p/:slug/submit - record a visitor form submission
pub async fn submit_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let page = published_page(&state, &slug).await?;

    // Extra fields must be strings; anything else fails deserialization.
    let data: SubmissionData = serde_json::from_value(body)
        .map_err(|e| ApiError::Validation(format!("invalid request body: {}", e)))?;

    if !is_valid_email(&data.email) {
        return Err(ApiError::Validation(
            "a valid email address is required".to_string(),
        ));
    }

    let record = state.submissions.append(page.id, data).await?;
    info!("submission {} recorded for page {}", record.id, page.id);

    Ok(Json(SubmitResponse {
        success: true,
        message: "Submission received".to_string(),
    }))
}

/// GET /api/pages/:id/submissions - a page's submissions, owner only
pub async fn list_submissions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionListResponse>, ApiError> {
    let session = require_session(&state, &headers)?;
    let page = owned_page(&state, &session, id).await?;

    let submissions = state.submissions.list_for_page(page.id).await?;
    Ok(Json(SubmissionListResponse {
        success: true,
        submissions,
    }))
}
