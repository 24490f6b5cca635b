// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Newsletter API endpoint module
//!
//! Provides POST /api/newsletter (subscribe) and GET /api/newsletter
//! (subscriber count).

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{newsletter_count_handler, subscribe_handler};
pub use request::SubscribeRequest;
pub use response::{NewsletterCountResponse, SubscribeResponse};
