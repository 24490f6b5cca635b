// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod auth;
pub mod config;
pub mod credentials;
pub mod genai;
pub mod image_search;
pub mod models;
pub mod store;
pub mod version;

// Re-export the types most callers need
pub use api::{create_app, start_server, ApiError, AppState};
pub use config::AppConfig;
pub use credentials::{CredentialResolver, ProviderCredential, ProviderKind};
pub use genai::{GeminiClient, GenAiError, GeneratedImage, ImageGenOptions};
pub use image_search::{ImageSearchService, StockImage};
pub use models::{LandingPage, SubmissionData, UserProfile, UserSettings};
pub use store::{
    DataApiClient, FallbackNewsletterStore, MemoryStore, NewsletterStore, PageStore, StoreError,
    SubmissionStore, UserStore,
};
