// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Stock image search tests for GET /api/images/search
//!
//! These tests verify that:
//! - Results come back with the query echoed
//! - `topic` is used as the query when `query` is absent
//! - A request with neither query nor topic is a 400
//! - Out-of-range counts are a 400 before any provider call
//! - Rate limiting surfaces as 429
//! - Other provider failures surface as a generic 500
//! - Failover tries providers in priority order

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use pagesmith_node::api::http_server::{create_app, AppState};
use pagesmith_node::image_search::{
    ImageProvider, ImageSearchError, ImageSearchService, StockImage,
};
use serde_json::Value;
use tower::util::ServiceExt;

fn sample_image(id: &str) -> StockImage {
    StockImage {
        id: id.to_string(),
        url: format!("https://photos.example.com/{}.jpg", id),
        thumbnail_url: format!("https://photos.example.com/{}-small.jpg", id),
        photographer: "Ada".to_string(),
        photographer_url: "https://photos.example.com/ada".to_string(),
        alt: Some("a greenhouse".to_string()),
        width: 1920,
        height: 1080,
        source: "stub".to_string(),
    }
}

enum StubOutcome {
    Images(Vec<StockImage>),
    RateLimited,
    Failure,
}

/// Provider stub with a fixed outcome and a call counter.
///
/// Tests hold it through [`SharedStub`], a local newtype around `Arc`
/// (the orphan rule forbids implementing `ImageProvider` for
/// `Arc<StubProvider>` outside the crate that defines the trait): one
/// clone is boxed into the app while the test keeps another to read
/// the call counter.
struct StubProvider {
    provider_name: &'static str,
    outcome: StubOutcome,
    priority: u8,
    calls: AtomicUsize,
}

#[derive(Clone)]
struct SharedStub(Arc<StubProvider>);

impl StubProvider {
    fn new(provider_name: &'static str, outcome: StubOutcome, priority: u8) -> SharedStub {
        SharedStub(Arc::new(Self {
            provider_name,
            outcome,
            priority,
            calls: AtomicUsize::new(0),
        }))
    }
}

impl SharedStub {
    fn calls(&self) -> usize {
        self.0.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProvider for SharedStub {
    async fn search(
        &self,
        _query: &str,
        _count: usize,
        _orientation: Option<&str>,
    ) -> Result<Vec<StockImage>, ImageSearchError> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        match &self.0.outcome {
            StubOutcome::Images(images) => Ok(images.clone()),
            StubOutcome::RateLimited => Err(ImageSearchError::RateLimited {
                retry_after_secs: 60,
            }),
            StubOutcome::Failure => Err(ImageSearchError::ApiError {
                status: 500,
                message: "backend exploded".to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        self.0.provider_name
    }

    fn is_available(&self) -> bool {
        true
    }

    fn priority(&self) -> u8 {
        self.0.priority
    }
}

fn app_with_providers(providers: Vec<Box<dyn ImageProvider>>) -> axum::Router {
    let mut state = AppState::new_for_test();
    state.image_search = Arc::new(ImageSearchService::with_providers(providers));
    create_app(state)
}

fn search_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}

#[tokio::test]
async fn test_search_returns_images_and_echoes_query() {
    let provider = StubProvider::new(
        "stub",
        StubOutcome::Images(vec![sample_image("1"), sample_image("2")]),
        10,
    );
    let app = app_with_providers(vec![Box::new(provider)]);

    let response = app
        .oneshot(search_request("/api/images/search?query=greenhouse"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "greenhouse");
    assert_eq!(body["images"].as_array().unwrap().len(), 2);
    assert_eq!(body["images"][0]["thumbnailUrl"].as_str().unwrap(), "https://photos.example.com/1-small.jpg");
}

#[tokio::test]
async fn test_topic_is_used_when_query_is_absent() {
    let provider = StubProvider::new("stub", StubOutcome::Images(vec![sample_image("1")]), 10);
    let app = app_with_providers(vec![Box::new(provider)]);

    let response = app
        .oneshot(search_request("/api/images/search?topic=bakery"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["query"], "bakery");
}

#[tokio::test]
async fn test_missing_query_and_topic_is_400() {
    let provider = StubProvider::new("stub", StubOutcome::Images(vec![]), 10);
    let counter = provider.clone();
    let app = app_with_providers(vec![Box::new(provider)]);

    let response = app
        .oneshot(search_request("/api/images/search"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(counter.calls(), 0);
}

#[tokio::test]
async fn test_out_of_range_count_is_400() {
    for count in ["0", "31"] {
        let provider = StubProvider::new("stub", StubOutcome::Images(vec![]), 10);
        let counter = provider.clone();
        let app = app_with_providers(vec![Box::new(provider)]);

        let response = app
            .oneshot(search_request(&format!(
                "/api/images/search?query=x&count={}",
                count
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "count={}", count);
        assert_eq!(counter.calls(), 0);
    }
}

#[tokio::test]
async fn test_rate_limited_provider_surfaces_as_429() {
    let provider = StubProvider::new("stub", StubOutcome::RateLimited, 10);
    let app = app_with_providers(vec![Box::new(provider)]);

    let response = app
        .oneshot(search_request("/api/images/search?query=greenhouse"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_provider_failure_is_a_generic_500() {
    let provider = StubProvider::new("stub", StubOutcome::Failure, 10);
    let app = app_with_providers(vec![Box::new(provider)]);

    let response = app
        .oneshot(search_request("/api/images/search?query=greenhouse"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Image search failed");
    assert!(!body["error"].as_str().unwrap().contains("exploded"));
}

#[tokio::test]
async fn test_failover_prefers_lower_priority_and_skips_to_next() {
    let failing = StubProvider::new("first", StubOutcome::Failure, 1);
    let healthy = StubProvider::new(
        "second",
        StubOutcome::Images(vec![sample_image("1")]),
        50,
    );
    let failing_counter = failing.clone();
    let healthy_counter = healthy.clone();
    let app = app_with_providers(vec![Box::new(healthy), Box::new(failing)]);

    let response = app
        .oneshot(search_request("/api/images/search?query=greenhouse"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // The failing provider has the better priority, so it was tried first
    assert_eq!(failing_counter.calls(), 1);
    assert_eq!(healthy_counter.calls(), 1);
}
