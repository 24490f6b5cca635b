// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Degraded-mode newsletter store
//!
//! Wraps the durable backend and absorbs its failures: when a write or
//! read fails, the address lands in a process-local list instead and the
//! subscriber keeps getting a success response. Entries captured while
//! degraded are NOT replayed into the durable store; the list only
//! prevents silent drops within one process lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::{NewsletterStore, StoreError, SubscribeOutcome};

pub struct FallbackNewsletterStore {
    durable: Arc<dyn NewsletterStore>,
    captured: RwLock<Vec<String>>,
    degraded: AtomicBool,
}

impl FallbackNewsletterStore {
    pub fn new(durable: Arc<dyn NewsletterStore>) -> Self {
        Self {
            durable,
            captured: RwLock::new(Vec::new()),
            degraded: AtomicBool::new(false),
        }
    }

    fn note_degraded(&self, err: &StoreError) {
        if !self.degraded.swap(true, Ordering::SeqCst) {
            warn!("newsletter store degraded, capturing in memory: {}", err);
        }
    }

    fn note_recovered(&self) {
        if self.degraded.swap(false, Ordering::SeqCst) {
            info!("newsletter store recovered");
        }
    }

    /// Record an address in the local list. The duplicate check and the
    /// append take the lock separately, so a concurrent duplicate can
    /// slip through; degraded mode trades that for availability.
    async fn capture(&self, email: &str) -> SubscribeOutcome {
        let seen = {
            let captured = self.captured.read().await;
            captured.iter().any(|e| e == email)
        };
        if seen {
            return SubscribeOutcome::AlreadySubscribed;
        }
        let mut captured = self.captured.write().await;
        captured.push(email.to_string());
        SubscribeOutcome::Created
    }
}

#[async_trait]
impl NewsletterStore for FallbackNewsletterStore {
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, StoreError> {
        match self.durable.subscribe(email).await {
            Ok(outcome) => {
                self.note_recovered();
                Ok(outcome)
            }
            Err(err) => {
                self.note_degraded(&err);
                Ok(self.capture(email).await)
            }
        }
    }

    async fn count(&self) -> Result<u64, StoreError> {
        match self.durable.count().await {
            Ok(count) => {
                self.note_recovered();
                Ok(count)
            }
            Err(err) => {
                self.note_degraded(&err);
                Ok(self.captured.read().await.len() as u64)
            }
        }
    }

    fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }
}
