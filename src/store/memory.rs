// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-memory store backend
//!
//! Used when no data API is configured, and as the deterministic backend
//! in tests. `set_outage` makes every call fail with `Unavailable` so
//! degraded paths can be exercised.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    LandingPage, NewPage, SubmissionData, SubmissionRecord, Subscriber, UserProfile, UserSettings,
};

use super::{
    NewsletterStore, PageStore, StoreError, SubmissionStore, SubscribeOutcome, UserStore,
};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, (UserProfile, UserSettings)>>,
    subscribers: RwLock<Vec<Subscriber>>,
    pages: RwLock<HashMap<Uuid, LandingPage>>,
    submissions: RwLock<HashMap<Uuid, Vec<SubmissionRecord>>>,
    outage: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `Unavailable`
    pub fn set_outage(&self, down: bool) {
        self.outage.store(down, Ordering::SeqCst);
    }

    /// Seed an account with default settings
    pub async fn insert_user(&self, profile: UserProfile) {
        let mut users = self.users.write().await;
        users.insert(profile.id.clone(), (profile, UserSettings::default()));
    }

    pub async fn insert_user_with_settings(&self, profile: UserProfile, settings: UserSettings) {
        let mut users = self.users.write().await;
        users.insert(profile.id.clone(), (profile, settings));
    }

    /// Seed a page row as-is, slug and publish state included
    pub async fn insert_page(&self, page: LandingPage) {
        let mut pages = self.pages.write().await;
        pages.insert(page.id, page);
    }

    fn guard(&self) -> Result<(), StoreError> {
        if self.outage.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile, StoreError> {
        self.guard()?;
        let users = self.users.read().await;
        users
            .get(user_id)
            .map(|(profile, _)| profile.clone())
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
    }

    async fn get_settings(&self, user_id: &str) -> Result<UserSettings, StoreError> {
        self.guard()?;
        let users = self.users.read().await;
        users
            .get(user_id)
            .map(|(_, settings)| settings.clone())
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
    }

    async fn update_settings(
        &self,
        user_id: &str,
        settings: UserSettings,
    ) -> Result<(), StoreError> {
        self.guard()?;
        let mut users = self.users.write().await;
        match users.get_mut(user_id) {
            Some(entry) => {
                entry.1 = settings;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("user {}", user_id))),
        }
    }
}

#[async_trait]
impl NewsletterStore for MemoryStore {
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, StoreError> {
        self.guard()?;
        let mut subscribers = self.subscribers.write().await;
        if subscribers.iter().any(|s| s.email == email) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        subscribers.push(Subscriber {
            email: email.to_string(),
            subscribed_at: Utc::now(),
        });
        Ok(SubscribeOutcome::Created)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.guard()?;
        Ok(self.subscribers.read().await.len() as u64)
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn create(&self, page: NewPage) -> Result<LandingPage, StoreError> {
        self.guard()?;
        let stored = LandingPage {
            id: Uuid::new_v4(),
            owner_id: page.owner_id,
            title: page.title,
            topic: page.topic,
            slug: None,
            published: false,
            content: page.content,
            created_at: Utc::now(),
        };
        let mut pages = self.pages.write().await;
        pages.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<LandingPage, StoreError> {
        self.guard()?;
        let pages = self.pages.read().await;
        pages
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("page {}", id)))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<LandingPage, StoreError> {
        self.guard()?;
        let pages = self.pages.read().await;
        pages
            .values()
            .find(|p| p.slug.as_deref() == Some(slug))
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("page with slug {}", slug)))
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<LandingPage>, StoreError> {
        self.guard()?;
        let pages = self.pages.read().await;
        let mut owned: Vec<LandingPage> = pages
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn publish(&self, id: Uuid, slug: &str) -> Result<LandingPage, StoreError> {
        self.guard()?;
        let mut pages = self.pages.write().await;
        match pages.get_mut(&id) {
            Some(page) => {
                page.slug = Some(slug.to_string());
                page.published = true;
                Ok(page.clone())
            }
            None => Err(StoreError::NotFound(format!("page {}", id))),
        }
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn append(
        &self,
        page_id: Uuid,
        data: SubmissionData,
    ) -> Result<SubmissionRecord, StoreError> {
        self.guard()?;
        let record = SubmissionRecord {
            id: Uuid::new_v4(),
            page_id,
            data,
            submitted_at: Utc::now(),
        };
        let mut submissions = self.submissions.write().await;
        submissions
            .entry(page_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<SubmissionRecord>, StoreError> {
        self.guard()?;
        let submissions = self.submissions.read().await;
        Ok(submissions.get(&page_id).cloned().unwrap_or_default())
    }
}
