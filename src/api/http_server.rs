// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring
//!
//! Builds the router, owns the shared application state, and runs the
//! listener with graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::auth::session_gate;
use crate::config::AppConfig;
use crate::credentials::CredentialResolver;
use crate::genai::{GeminiClient, ImageGeneration, TextGeneration};
use crate::image_search::ImageSearchService;
use crate::store::{
    FallbackNewsletterStore, MemoryStore, NewsletterStore, PageStore, SubmissionStore, UserStore,
};
use crate::version;

use super::distribute::distribute_handler;
use super::generate::generate_handler;
use super::image::generate_image_handler;
use super::image_search::search_images_handler;
use super::newsletter::{newsletter_count_handler, subscribe_handler};
use super::pages::{
    create_page_handler, list_pages_handler, list_submissions_handler, public_page_handler,
    publish_page_handler, submit_handler,
};
use super::users::{has_api_key_handler, me_handler, update_settings_handler};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: Arc<CredentialResolver>,
    pub text_gen: Arc<dyn TextGeneration>,
    pub image_gen: Arc<dyn ImageGeneration>,
    pub users: Arc<dyn UserStore>,
    pub newsletter: Arc<dyn NewsletterStore>,
    pub pages: Arc<dyn PageStore>,
    pub submissions: Arc<dyn SubmissionStore>,
    pub image_search: Arc<ImageSearchService>,
}

impl AppState {
    /// Memory-backed state for tests: no data API, no provider keys, a
    /// fixed session secret.
    pub fn new_for_test() -> Self {
        let config = Arc::new(AppConfig {
            session_secret: "test-secret".to_string(),
            ..AppConfig::default()
        });
        let store = Arc::new(MemoryStore::new());
        let gemini = Arc::new(GeminiClient::new(&config.gemini_base_url));

        Self {
            credentials: Arc::new(CredentialResolver::new(
                store.clone(),
                config.gemini_api_key.clone(),
            )),
            text_gen: gemini.clone(),
            image_gen: gemini,
            users: store.clone(),
            newsletter: Arc::new(FallbackNewsletterStore::new(store.clone())),
            pages: store.clone(),
            submissions: store,
            image_search: Arc::new(ImageSearchService::new(None)),
            config,
        }
    }
}

/// Build the full application router
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/distribute", post(distribute_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/image", post(generate_image_handler))
        .route("/api/images/search", get(search_images_handler))
        .route(
            "/api/newsletter",
            post(subscribe_handler).get(newsletter_count_handler),
        )
        .route("/api/users/me", get(me_handler))
        .route("/api/users/has-api-key", get(has_api_key_handler))
        .route("/api/users/settings", put(update_settings_handler))
        .route(
            "/api/pages",
            post(create_page_handler).get(list_pages_handler),
        )
        .route("/api/pages/:id/publish", post(publish_page_handler))
        .route("/api/pages/:id/submissions", get(list_submissions_handler))
        .route("/api/p/:slug", get(public_page_handler))
        .route("/api/p/:slug/submit", post(submit_handler))
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.cors_allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind and serve until interrupted
pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = state.config.listen_addr.parse()?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("shutdown signal received");
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// True while the newsletter store is serving from its in-memory
    /// fallback
    pub degraded: bool,
}

async fn health_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION.to_string(),
        degraded: state.newsletter.is_degraded(),
    })
}
