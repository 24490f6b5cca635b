// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use std::{env, sync::Arc};
use tracing::{info, warn};

use pagesmith_node::api::{start_server, AppState};
use pagesmith_node::config::AppConfig;
use pagesmith_node::credentials::CredentialResolver;
use pagesmith_node::genai::GeminiClient;
use pagesmith_node::image_search::ImageSearchService;
use pagesmith_node::store::{
    DataApiClient, FallbackNewsletterStore, MemoryStore, NewsletterStore, PageStore,
    SubmissionStore, UserStore,
};
use pagesmith_node::version;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("starting pagesmith node {}", version::VERSION);

    let config = AppConfig::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("invalid configuration: {}", e);
    }
    let config = Arc::new(config);

    if !config.has_default_gemini_key() {
        warn!("GEMINI_API_KEY is not set; generation needs a per-user or per-request key");
    }

    // Durable rows live behind the data API; without one, everything
    // stays in process memory (development mode).
    let (users, newsletter, pages, submissions): (
        Arc<dyn UserStore>,
        Arc<dyn NewsletterStore>,
        Arc<dyn PageStore>,
        Arc<dyn SubmissionStore>,
    ) = match &config.data_api_url {
        Some(url) => {
            let client = Arc::new(DataApiClient::new(url, config.data_api_token.clone())?);
            info!("using data API at {}", url);
            (client.clone(), client.clone(), client.clone(), client)
        }
        None => {
            warn!("DATA_API_URL is not set; rows live in process memory only");
            let store = Arc::new(MemoryStore::new());
            (store.clone(), store.clone(), store.clone(), store)
        }
    };

    // Newsletter writes survive a data API outage via the in-memory
    // fallback; the other stores surface their failures.
    let newsletter = Arc::new(FallbackNewsletterStore::new(newsletter));

    let gemini = Arc::new(GeminiClient::new(&config.gemini_base_url));
    let image_search = Arc::new(ImageSearchService::new(config.pexels_api_key.clone()));
    let credentials = Arc::new(CredentialResolver::new(
        users.clone(),
        config.gemini_api_key.clone(),
    ));

    let state = AppState {
        credentials,
        text_gen: gemini.clone(),
        image_gen: gemini,
        users,
        newsletter,
        pages,
        submissions,
        image_search,
        config,
    };

    start_server(state).await
}
