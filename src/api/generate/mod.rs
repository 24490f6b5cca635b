// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page generation API endpoint module
//!
//! Provides POST /api/generate for producing a full landing page
//! document from a topic and brief.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_handler;
pub use request::GenerateRequest;
pub use response::GenerateResponse;
