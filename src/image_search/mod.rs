// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Stock image search with provider failover

pub mod pexels;
pub mod provider;
pub mod service;
pub mod types;

pub use pexels::PexelsProvider;
pub use provider::ImageProvider;
pub use service::ImageSearchService;
pub use types::{ImageSearchError, StockImage};
