// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session gate middleware
//!
//! Applied to the whole router; consults the gating predicate and
//! rejects unauthenticated requests to protected prefixes with a 401
//! envelope before routing happens.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

use super::gating::requires_session;
use super::session::session_from_headers;

pub async fn session_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if requires_session(request.uri().path())
        && session_from_headers(request.headers(), &state.config.session_secret).is_none()
    {
        return ApiError::Unauthorized("authentication required".to_string()).into_response();
    }
    next.run(request).await
}
