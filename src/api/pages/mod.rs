// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Landing page API endpoint module
//!
//! Owner-facing routes under /api/pages (create, list, publish, read
//! submissions) and public routes under /api/p/:slug (view, submit).

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{
    create_page_handler, list_pages_handler, list_submissions_handler, public_page_handler,
    publish_page_handler, submit_handler,
};
pub use request::CreatePageRequest;
pub use response::{
    PageListResponse, PageResponse, SubmissionListResponse, SubmitResponse,
};
