// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User settings request types

use serde::{Deserialize, Serialize};

use crate::models::UserSettings;

/// Request for PUT /api/users/settings. Partial update: absent fields
/// keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub use_own_key: Option<bool>,

    /// An explicit empty string clears the stored key
    #[serde(default)]
    pub gemini_api_key: Option<String>,
}

impl UpdateSettingsRequest {
    /// Apply this update on top of the stored settings
    pub fn apply_to(&self, mut settings: UserSettings) -> UserSettings {
        if let Some(use_own_key) = self.use_own_key {
            settings.use_own_key = use_own_key;
        }
        if let Some(key) = &self.gemini_api_key {
            settings.gemini_api_key = if key.trim().is_empty() {
                None
            } else {
                Some(key.clone())
            };
        }
        settings
    }
}
