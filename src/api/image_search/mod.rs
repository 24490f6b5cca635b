// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stock image search API endpoint module
//!
//! Provides GET /api/images/search over the configured image providers.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::search_images_handler;
pub use request::ImageSearchParams;
pub use response::ImageSearchResponse;
