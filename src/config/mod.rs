// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-driven service configuration

use std::env;

/// Default public Gemini API origin; override with GEMINI_BASE_URL to point
/// at a proxy or a test double.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the pagesmith node, loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// HS256 secret used to verify session bearer tokens
    pub session_secret: String,
    /// Process-wide default Gemini key; empty means "no credential available"
    pub gemini_api_key: String,
    /// Gemini API origin
    pub gemini_base_url: String,
    /// Model used for landing-page and distribution text generation
    pub text_model: String,
    /// Model used for image generation
    pub image_model: String,
    /// Pexels key for stock image search; absent disables the endpoint
    pub pexels_api_key: Option<String>,
    /// Base URL of the external data API; absent selects the in-memory store
    pub data_api_url: Option<String>,
    /// Bearer token for the data API
    pub data_api_token: Option<String>,
    /// Allowed CORS origins; "*" means any
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            session_secret: env::var("SESSION_SECRET").unwrap_or_default(),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            text_model: env::var("TEXT_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            image_model: env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string()),
            pexels_api_key: env::var("PEXELS_API_KEY").ok().filter(|k| !k.is_empty()),
            data_api_url: env::var("DATA_API_URL").ok().filter(|u| !u.is_empty()),
            data_api_token: env::var("DATA_API_TOKEN").ok().filter(|t| !t.is_empty()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!("LISTEN_ADDR '{}' is not a socket address", self.listen_addr));
        }
        if self.session_secret.is_empty() {
            return Err("SESSION_SECRET must be set".to_string());
        }
        if self.text_model.is_empty() || self.image_model.is_empty() {
            return Err("TEXT_MODEL and IMAGE_MODEL must be non-empty".to_string());
        }
        if let Some(ref raw) = self.data_api_url {
            url::Url::parse(raw).map_err(|e| format!("DATA_API_URL invalid: {}", e))?;
        }
        Ok(())
    }

    /// Whether the process carries a default generation credential
    pub fn has_default_gemini_key(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            session_secret: String::new(),
            gemini_api_key: String::new(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            text_model: "gemini-2.0-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            pexels_api_key: None,
            data_api_url: None,
            data_api_token: None,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}
