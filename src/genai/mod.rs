// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! AI generation pipeline
//!
//! Resolve credential -> build prompt -> call provider -> extract
//! payload -> normalize. Each step is its own module; handlers compose
//! them per request with no shared mutable state.

pub mod client;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use client::GeminiClient;
pub use extract::extract_json_block;
pub use normalize::normalize_answers;
pub use prompt::{build_distribution_prompt, build_image_prompt, build_landing_page_prompt, PageStyle};
pub use types::{GenAiError, GeneratedImage, ImageGenOptions, ImageGeneration, TextGeneration};
