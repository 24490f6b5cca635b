// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Newsletter response types

use serde::{Deserialize, Serialize};

/// Response from POST /api/newsletter. A duplicate subscribe is still a
/// success, with a message that says so.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
}

/// Response from GET /api/newsletter. Bare count, no success field;
/// existing clients depend on this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterCountResponse {
    pub count: u64,
}
