// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page response types

use serde::{Deserialize, Serialize};

use crate::models::{LandingPage, SubmissionRecord};

/// Envelope for a single page (create, publish, public read)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse {
    pub success: bool,
    pub page: LandingPage,
}

/// Envelope for the caller's page list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageListResponse {
    pub success: bool,
    pub pages: Vec<LandingPage>,
}

/// Response from POST /api/p/:slug/submit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

/// Envelope for a page's submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub success: bool,
    pub submissions: Vec<SubmissionRecord>,
}
