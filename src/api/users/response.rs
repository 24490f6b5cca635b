// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User account response types

use serde::{Deserialize, Serialize};

/// Response from GET /api/users/has-api-key. Bare flag, no success
/// field; fails closed to `false` for anonymous callers and store
/// errors alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasApiKeyResponse {
    pub has_api_key: bool,
}

/// Response from PUT /api/users/settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSettingsResponse {
    pub success: bool,
}
