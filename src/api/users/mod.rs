// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! User account API endpoint module
//!
//! Provides GET /api/users/me, GET /api/users/has-api-key and
//! PUT /api/users/settings.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{has_api_key_handler, me_handler, update_settings_handler};
pub use request::UpdateSettingsRequest;
pub use response::{HasApiKeyResponse, UpdateSettingsResponse};
