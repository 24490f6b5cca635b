// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page generation response types

use serde::{Deserialize, Serialize};

/// Response from POST /api/generate. `data` is the generated landing
/// page document exactly as extracted from the provider output; this
/// service does not interpret its inner structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: serde_json::Value,
}
