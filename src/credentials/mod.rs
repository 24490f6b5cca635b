// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Provider credential resolution
//!
//! Every generation call resolves its API key through an ordered source
//! chain: an explicit per-request override, then the caller's stored key
//! (only when they opted in), then the process-wide default. The first
//! source that yields a key wins; later sources are not consulted.
//! Resolution itself never fails. A missing key everywhere resolves to
//! an empty credential, which the provider client rejects before any
//! network call.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::store::UserStore;

/// Which generation surface a credential is for. Both currently share
/// one Gemini key; the tag keeps logs and future per-kind keys honest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    TextGeneration,
    ImageGeneration,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::TextGeneration => "text-generation",
            ProviderKind::ImageGeneration => "image-generation",
        }
    }
}

/// A resolved key plus where it came from
#[derive(Debug, Clone)]
pub struct ProviderCredential {
    pub kind: ProviderKind,
    pub secret: String,
    pub source: &'static str,
}

impl ProviderCredential {
    pub fn is_empty(&self) -> bool {
        self.secret.trim().is_empty()
    }
}

/// Inputs available to each source during one resolution
pub struct ResolveContext<'a> {
    /// Authenticated caller, when the endpoint has one
    pub identity: Option<&'a str>,
    /// Key supplied in the request body
    pub override_key: Option<&'a str>,
}

#[async_trait]
pub trait CredentialSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Return a key if this source has one for the caller. `None` passes
    /// resolution to the next source in the chain.
    async fn lookup(&self, ctx: &ResolveContext<'_>, kind: ProviderKind) -> Option<String>;
}

/// Per-request override key. Blank strings count as absent.
pub struct OverrideSource;

#[async_trait]
impl CredentialSource for OverrideSource {
    fn name(&self) -> &'static str {
        "request-override"
    }

    async fn lookup(&self, ctx: &ResolveContext<'_>, _kind: ProviderKind) -> Option<String> {
        ctx.override_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
    }
}

/// The caller's stored key, honored only when they opted in. Store
/// failures degrade to "no user key" rather than failing the request.
pub struct UserSettingsSource {
    users: Arc<dyn UserStore>,
}

impl UserSettingsSource {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CredentialSource for UserSettingsSource {
    fn name(&self) -> &'static str {
        "user-settings"
    }

    async fn lookup(&self, ctx: &ResolveContext<'_>, _kind: ProviderKind) -> Option<String> {
        let user_id = ctx.identity?;
        match self.users.get_settings(user_id).await {
            Ok(settings) => settings.active_key().map(str::to_string),
            Err(err) => {
                warn!(
                    "settings lookup for user {} failed, falling back to default key: {}",
                    user_id, err
                );
                None
            }
        }
    }
}

/// Process-wide default key. Always answers, even when the configured
/// key is empty; the terminal link of the chain.
pub struct ProcessDefaultSource {
    default_key: String,
}

impl ProcessDefaultSource {
    pub fn new(default_key: String) -> Self {
        Self { default_key }
    }
}

#[async_trait]
impl CredentialSource for ProcessDefaultSource {
    fn name(&self) -> &'static str {
        "process-default"
    }

    async fn lookup(&self, _ctx: &ResolveContext<'_>, _kind: ProviderKind) -> Option<String> {
        Some(self.default_key.clone())
    }
}

pub struct CredentialResolver {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialResolver {
    /// The standard chain: override, then user settings, then default
    pub fn new(users: Arc<dyn UserStore>, default_key: String) -> Self {
        Self {
            sources: vec![
                Box::new(OverrideSource),
                Box::new(UserSettingsSource::new(users)),
                Box::new(ProcessDefaultSource::new(default_key)),
            ],
        }
    }

    pub fn with_sources(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    pub async fn resolve(
        &self,
        identity: Option<&str>,
        override_key: Option<&str>,
        kind: ProviderKind,
    ) -> ProviderCredential {
        let ctx = ResolveContext {
            identity,
            override_key,
        };

        for source in &self.sources {
            if let Some(secret) = source.lookup(&ctx, kind).await {
                debug!("{} key resolved from {}", kind.as_str(), source.name());
                return ProviderCredential {
                    kind,
                    secret,
                    source: source.name(),
                };
            }
        }

        // Only reachable with a custom chain that has no terminal source.
        ProviderCredential {
            kind,
            secret: String::new(),
            source: "none",
        }
    }
}
