// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Newsletter subscribe request types and validation

use serde::{Deserialize, Serialize};

use crate::models::is_valid_email;

/// Request for POST /api/newsletter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

impl SubscribeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_email(&self.email) {
            return Err("a valid email address is required".to_string());
        }
        Ok(())
    }

    /// The address as stored: trimmed and lowercased, so duplicate
    /// detection is case-insensitive
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}
