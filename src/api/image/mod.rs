// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation API endpoint module
//!
//! Provides POST /api/image for text-to-image generation.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_image_handler;
pub use request::ImageRequest;
pub use response::{ImagePayload, ImageResponse};
