// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Storage traits and backends
//!
//! The durable store is an external data API reached over HTTP; the
//! in-memory backend serves tests and the degraded-mode newsletter
//! fallback. Handlers depend only on the traits.

pub mod fallback;
pub mod http;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{LandingPage, NewPage, SubmissionData, SubmissionRecord, UserProfile, UserSettings};

pub use fallback::FallbackNewsletterStore;
pub use http::DataApiClient;
pub use memory::MemoryStore;

/// Errors surfaced by store backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure: the store could not be reached at all
    #[error("store unreachable: {0}")]
    Unavailable(String),

    /// The requested row does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The store answered with an error status
    #[error("store query failed ({status}): {message}")]
    Query { status: u16, message: String },

    /// A row could not be encoded or decoded
    #[error("store payload invalid: {0}")]
    Serialization(String),
}

/// Outcome of a newsletter subscribe: duplicates are an outcome, not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Created,
    AlreadySubscribed,
}

/// Account reads and settings writes
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError>;
    async fn get_settings(&self, user_id: &str) -> Result<UserSettings, StoreError>;
    async fn update_settings(
        &self,
        user_id: &str,
        settings: UserSettings,
    ) -> Result<(), StoreError>;
}

/// Newsletter subscriber rows
#[async_trait]
pub trait NewsletterStore: Send + Sync {
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, StoreError>;
    async fn count(&self) -> Result<u64, StoreError>;

    /// True while the backend is serving from a degraded fallback
    fn is_degraded(&self) -> bool {
        false
    }
}

/// Landing page rows
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn create(&self, page: NewPage) -> Result<LandingPage, StoreError>;
    async fn get_by_id(&self, id: Uuid) -> Result<LandingPage, StoreError>;
    async fn get_by_slug(&self, slug: &str) -> Result<LandingPage, StoreError>;
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<LandingPage>, StoreError>;
    async fn publish(&self, id: Uuid, slug: &str) -> Result<LandingPage, StoreError>;
}

/// Visitor form submission rows
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn append(
        &self,
        page_id: Uuid,
        data: SubmissionData,
    ) -> Result<SubmissionRecord, StoreError>;
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<SubmissionRecord>, StoreError>;
}
