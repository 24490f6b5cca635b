// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session token handling
//!
//! Sessions are short HS256 tokens issued by the auth frontend. This
//! service only verifies them; a bad or missing token is "anonymous",
//! never an error in itself.

use axum::http::header::{HeaderMap, AUTHORIZATION};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: usize,
}

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

/// Issue a session token. Used by tests and by operator tooling; the
/// production issuer is the auth frontend.
pub fn encode_session(
    user_id: &str,
    email: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token and return the session it carries. Expired, forged or
/// malformed tokens all resolve to `None`.
pub fn decode_session(token: &str, secret: &str) -> Option<Session> {
    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => Some(Session {
            user_id: data.claims.sub,
            email: data.claims.email,
        }),
        Err(e) => {
            debug!("rejected session token: {}", e);
            None
        }
    }
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the caller's session from request headers, if any
pub fn session_from_headers(headers: &HeaderMap, secret: &str) -> Option<Session> {
    decode_session(bearer_token(headers)?, secret)
}
