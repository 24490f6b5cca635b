// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Domain types shared across stores and API handlers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A registered account as exposed by GET /api/users/me
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-account provider settings (the "bring your own key" flow)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// When true, the account's own key is preferred over the process default
    #[serde(default)]
    pub use_own_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
}

impl UserSettings {
    /// The stored key, if the user opted in and the key is non-empty
    pub fn active_key(&self) -> Option<&str> {
        if !self.use_own_key {
            return None;
        }
        match self.gemini_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Some(key),
            _ => None,
        }
    }
}

/// A stored landing page. `content` is the AI-generated document as-is;
/// this service never interprets its inner structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub published: bool,
    pub content: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a page; id/slug/timestamps are store-assigned
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub owner_id: String,
    pub title: String,
    pub topic: String,
    pub content: serde_json::Value,
}

/// A visitor form submission: fixed required fields plus an explicit
/// string-to-string side map for dynamic form fields. Extra fields with
/// non-string values are a deserialization error, never an open record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionData {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub custom_fields: BTreeMap<String, String>,
}

/// A submission as stored, with its page linkage and receipt time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub page_id: Uuid,
    pub data: SubmissionData,
    pub submitted_at: DateTime<Utc>,
}

/// A newsletter subscriber row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

/// Derive a URL slug from a page title: lowercase, alphanumeric runs
/// joined by single hyphens. Empty output falls back to "page".
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        "page".to_string()
    } else {
        slug
    }
}

/// Minimal syntactic email check: one `@`, non-empty local part, and a
/// dot in the domain. The durable store is the real uniqueness arbiter.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > 254 || email.contains(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|l| !l.is_empty())
}
