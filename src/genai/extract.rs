// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Structured payload extraction from provider text
//!
//! Models wrap the requested JSON in prose or code fences. Recovery is
//! a single greedy brace span: first `{` through last `}`, parsed once.
//! No bracket-balance repair and no multiple candidate spans; when one
//! provider reply contains several JSON blocks, the greedy span covers
//! them all and parsing fails. Widening this to multi-block output is an
//! open product question, not something to generalize here.

use serde_json::Value;

use super::types::GenAiError;

/// Extract and parse the greedy brace span from raw provider text
pub fn extract_json_block(raw: &str) -> Result<Value, GenAiError> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    let span = match (start, end) {
        (Some(start), Some(end)) if start <= end => &raw[start..=end],
        _ => {
            return Err(GenAiError::Parse {
                raw: raw.to_string(),
            })
        }
    };
    serde_json::from_str(span).map_err(|_| GenAiError::Parse {
        raw: raw.to_string(),
    })
}
