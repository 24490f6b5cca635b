// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the external data API
//!
//! All durable rows (users, pages, submissions, subscribers) live behind
//! a JSON-over-HTTP data service. Each method maps one route; transport
//! failures become [`StoreError::Unavailable`] so callers can degrade.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::models::{LandingPage, NewPage, SubmissionData, SubmissionRecord, UserProfile, UserSettings};

use super::{
    NewsletterStore, PageStore, StoreError, SubmissionStore, SubscribeOutcome, UserStore,
};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the durable data API
pub struct DataApiClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl DataApiClient {
    pub fn new(base_url: &str, auth_token: Option<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.put(self.url(path)))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map a non-2xx response to a store error. 404 is its own variant so
    /// callers can translate it without parsing the body.
    async fn check(response: Response, what: &str) -> Result<Response, StoreError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Query {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, StoreError> {
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl UserStore for DataApiClient {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        debug!("fetching profile for user {}", user_id);
        let response = self
            .get(&format!("/users/{}", user_id))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "user profile").await?;
        Self::decode(response).await
    }

    async fn get_settings(&self, user_id: &str) -> Result<UserSettings, StoreError> {
        let response = self
            .get(&format!("/users/{}/settings", user_id))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "user settings").await?;
        Self::decode(response).await
    }

    async fn update_settings(
        &self,
        user_id: &str,
        settings: UserSettings,
    ) -> Result<(), StoreError> {
        let response = self
            .put(&format!("/users/{}/settings", user_id))
            .json(&settings)
            .send()
            .await
            .map_err(transport)?;
        Self::check(response, "user settings").await?;
        Ok(())
    }
}

#[async_trait]
impl NewsletterStore for DataApiClient {
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, StoreError> {
        let response = self
            .post("/newsletter/subscribers")
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(transport)?;

        // The data API answers 409 when the address is already on the list.
        if response.status() == StatusCode::CONFLICT {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        Self::check(response, "newsletter subscriber").await?;
        Ok(SubscribeOutcome::Created)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        #[derive(Deserialize)]
        struct CountBody {
            count: u64,
        }

        let response = self
            .get("/newsletter/subscribers/count")
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "subscriber count").await?;
        let body: CountBody = Self::decode(response).await?;
        Ok(body.count)
    }
}

#[async_trait]
impl PageStore for DataApiClient {
    async fn create(&self, page: NewPage) -> Result<LandingPage, StoreError> {
        let response = self
            .post("/pages")
            .json(&page)
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "landing page").await?;
        Self::decode(response).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<LandingPage, StoreError> {
        let response = self
            .get(&format!("/pages/{}", id))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "landing page").await?;
        Self::decode(response).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<LandingPage, StoreError> {
        let response = self
            .get(&format!("/pages/slug/{}", slug))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "landing page").await?;
        Self::decode(response).await
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<LandingPage>, StoreError> {
        let response = self
            .get(&format!("/users/{}/pages", owner_id))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "landing pages").await?;
        Self::decode(response).await
    }

    async fn publish(&self, id: Uuid, slug: &str) -> Result<LandingPage, StoreError> {
        let response = self
            .post(&format!("/pages/{}/publish", id))
            .json(&json!({ "slug": slug }))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "landing page").await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl SubmissionStore for DataApiClient {
    async fn append(
        &self,
        page_id: Uuid,
        data: SubmissionData,
    ) -> Result<SubmissionRecord, StoreError> {
        let response = self
            .post(&format!("/pages/{}/submissions", page_id))
            .json(&data)
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "submission").await?;
        Self::decode(response).await
    }

    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<SubmissionRecord>, StoreError> {
        let response = self
            .get(&format!("/pages/{}/submissions", page_id))
            .send()
            .await
            .map_err(transport)?;
        let response = Self::check(response, "submissions").await?;
        Self::decode(response).await
    }
}
