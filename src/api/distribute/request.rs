// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content distribution request types and validation

use serde::{Deserialize, Serialize};

/// Request for POST /api/distribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributeRequest {
    /// Source document the answers must come from
    pub text: String,

    /// Ordered question list; the response carries exactly one answer
    /// per entry, in the same order
    pub questions: Vec<String>,
}

impl DistributeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("text must not be empty".to_string());
        }
        if self.questions.is_empty() {
            return Err("questions must not be empty".to_string());
        }
        Ok(())
    }
}
