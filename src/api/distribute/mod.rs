// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content distribution API endpoint module
//!
//! Provides POST /api/distribute for answering a question list from a
//! source document.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::distribute_handler;
pub use request::DistributeRequest;
pub use response::DistributeResponse;
