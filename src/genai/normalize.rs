// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Answer count normalization
//!
//! The provider is asked for exactly N answers but is not trusted to
//! comply. The returned sequence is forced to length N: missing entries
//! become empty strings, extras are dropped, order is kept as-is.

use serde_json::Value;

/// Normalize a parsed `answers` value to exactly `expected` strings.
/// A missing or non-array value counts as an empty list. Non-string
/// entries are rendered as their JSON text; null becomes empty string.
pub fn normalize_answers(parsed: Option<&Value>, expected: usize) -> Vec<String> {
    let items: &[Value] = parsed.and_then(Value::as_array).map_or(&[], Vec::as_slice);
    let mut answers: Vec<String> = items
        .iter()
        .take(expected)
        .map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect();
    answers.resize(expected, String::new());
    answers
}
