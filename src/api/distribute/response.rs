// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content distribution response types

use serde::{Deserialize, Serialize};

/// Response from POST /api/distribute. `answers` always has exactly one
/// entry per request question; unanswerable questions are empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributeResponse {
    pub success: bool,
    pub answers: Vec<String>,
}
