// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Image generation tests for POST /api/image
//!
//! These tests verify that:
//! - The image comes back base64-encoded with its mime type and data URL
//! - An explicit prompt is sent as-is
//! - Without a prompt, one is composed from section, context and style
//! - The model falls back to the configured default
//! - Provider failures return a generic 500, with no provider detail

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use pagesmith_node::api::http_server::{create_app, AppState};
use pagesmith_node::credentials::ProviderCredential;
use pagesmith_node::genai::{GenAiError, GeneratedImage, ImageGenOptions, ImageGeneration};
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Image provider that returns fixed bytes and records what it was asked
struct CannedImageGen {
    bytes: Vec<u8>,
    mime: String,
    requests: Mutex<Vec<(String, String)>>,
}

impl CannedImageGen {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            bytes: vec![1, 2, 3],
            mime: "image/png".to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGeneration for CannedImageGen {
    async fn generate_image(
        &self,
        model: &str,
        prompt: &str,
        _options: &ImageGenOptions,
        _credential: &ProviderCredential,
    ) -> Result<GeneratedImage, GenAiError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        Ok(GeneratedImage {
            bytes: self.bytes.clone(),
            media_type: self.mime.clone(),
        })
    }
}

struct FailingImageGen;

#[async_trait]
impl ImageGeneration for FailingImageGen {
    async fn generate_image(
        &self,
        _model: &str,
        _prompt: &str,
        _options: &ImageGenOptions,
        _credential: &ProviderCredential,
    ) -> Result<GeneratedImage, GenAiError> {
        Err(GenAiError::Generation {
            message: "safety filters rejected the prompt".to_string(),
        })
    }
}

fn app_with_image_gen(image_gen: Arc<dyn ImageGeneration>) -> axum::Router {
    let mut state = AppState::new_for_test();
    state.image_gen = image_gen;
    create_app(state)
}

fn image_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/image")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}

#[tokio::test]
async fn test_image_payload_shape() {
    let image_gen = CannedImageGen::new();
    let app = app_with_image_gen(image_gen);

    let response = app
        .oneshot(image_request(json!({ "prompt": "a lighthouse at dusk" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["image"]["data"], "AQID");
    assert_eq!(body["image"]["mimeType"], "image/png");
    assert_eq!(body["image"]["dataUrl"], "data:image/png;base64,AQID");
}

#[tokio::test]
async fn test_explicit_prompt_is_sent_verbatim() {
    let image_gen = CannedImageGen::new();
    let app = app_with_image_gen(image_gen.clone());

    app.oneshot(image_request(json!({
        "prompt": "a lighthouse at dusk",
        "sectionType": "features",
        "context": "ignored when a prompt is given"
    })))
    .await
    .unwrap();

    let requests = image_gen.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1, "a lighthouse at dusk");
}

#[tokio::test]
async fn test_prompt_is_composed_when_absent() {
    let image_gen = CannedImageGen::new();
    let app = app_with_image_gen(image_gen.clone());

    let response = app
        .oneshot(image_request(json!({
            "context": "a bakery that ships sourdough nationwide",
            "style": "watercolor"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let requests = image_gen.requests();
    assert_eq!(requests.len(), 1);
    let prompt = &requests[0].1;
    // Section defaults to hero; context and style are woven in
    assert!(prompt.contains("hero"), "prompt was: {}", prompt);
    assert!(prompt.contains("a bakery that ships sourdough nationwide"));
    assert!(prompt.contains("watercolor"));
}

#[tokio::test]
async fn test_empty_body_still_generates_a_hero_image() {
    let image_gen = CannedImageGen::new();
    let app = app_with_image_gen(image_gen.clone());

    let response = app.oneshot(image_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let requests = image_gen.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].1.contains("hero"));
}

#[tokio::test]
async fn test_model_defaults_to_configured_one() {
    let image_gen = CannedImageGen::new();
    let mut state = AppState::new_for_test();
    let configured = state.config.image_model.clone();
    state.image_gen = image_gen.clone();
    let app = create_app(state);

    app.oneshot(image_request(json!({ "prompt": "a lighthouse at dusk" })))
        .await
        .unwrap();

    assert_eq!(image_gen.requests()[0].0, configured);
}

#[tokio::test]
async fn test_model_override_is_honored() {
    let image_gen = CannedImageGen::new();
    let app = app_with_image_gen(image_gen.clone());

    app.oneshot(image_request(json!({
        "prompt": "a lighthouse at dusk",
        "model": "some-other-image-model"
    })))
    .await
    .unwrap();

    assert_eq!(image_gen.requests()[0].0, "some-other-image-model");
}

#[tokio::test]
async fn test_provider_failure_is_a_generic_500() {
    let app = app_with_image_gen(Arc::new(FailingImageGen));

    let response = app
        .oneshot(image_request(json!({ "prompt": "a lighthouse at dusk" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to generate image");
    // Provider detail stays in the logs, not in the response
    assert!(body.get("details").is_none());
    assert!(!body["error"].as_str().unwrap().contains("safety"));
}
