// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Content distribution tests for POST /api/distribute
//!
//! These tests verify that:
//! - The response always carries exactly one answer per question, in order
//! - Short provider answer lists are padded with empty strings
//! - Long provider answer lists are truncated
//! - JSON wrapped in prose or code fences is still extracted
//! - Output with no JSON object fails with a generic 500 envelope
//! - Validation failures return 400 before any provider call

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use pagesmith_node::api::http_server::{create_app, AppState};
use pagesmith_node::credentials::ProviderCredential;
use pagesmith_node::genai::{GenAiError, TextGeneration};
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Text provider that always returns the same reply and counts calls
struct ScriptedTextGen {
    reply: String,
    calls: AtomicUsize,
}

impl ScriptedTextGen {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGeneration for ScriptedTextGen {
    async fn generate_text(
        &self,
        _model: &str,
        _prompt: &str,
        _credential: &ProviderCredential,
    ) -> Result<String, GenAiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Text provider that always fails
struct FailingTextGen;

#[async_trait]
impl TextGeneration for FailingTextGen {
    async fn generate_text(
        &self,
        _model: &str,
        _prompt: &str,
        _credential: &ProviderCredential,
    ) -> Result<String, GenAiError> {
        Err(GenAiError::Generation {
            message: "quota exceeded".to_string(),
        })
    }
}

fn app_with_text_gen(text_gen: Arc<dyn TextGeneration>) -> Router {
    let mut state = AppState::new_for_test();
    state.text_gen = text_gen;
    create_app(state)
}

fn distribute_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/distribute")
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
async fn test_answers_match_question_count_and_order() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": ["first", "second", "third"]}"#);
    let app = app_with_text_gen(text_gen.clone());

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Our product ships worldwide. Returns are free for 30 days.",
            "questions": ["Where do you ship?", "Are returns free?", "How long?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["answers"], json!(["first", "second", "third"]));
    assert_eq!(text_gen.calls(), 1);
}

#[tokio::test]
async fn test_short_provider_list_is_padded() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": ["only one"]}"#);
    let app = app_with_text_gen(text_gen);

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": ["Q1?", "Q2?", "Q3?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["answers"], json!(["only one", "", ""]));
}

#[tokio::test]
async fn test_long_provider_list_is_truncated() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": ["a", "b", "c", "d"]}"#);
    let app = app_with_text_gen(text_gen);

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": ["Q1?", "Q2?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["answers"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_non_string_answers_are_coerced() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": ["ok", 42, null]}"#);
    let app = app_with_text_gen(text_gen);

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": ["Q1?", "Q2?", "Q3?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["answers"], json!(["ok", "42", ""]));
}

#[tokio::test]
async fn test_json_wrapped_in_prose_is_extracted() {
    let text_gen = ScriptedTextGen::new(
        "Sure! Here is the result you asked for:\n```json\n{\"answers\": [\"from the text\"]}\n```\nLet me know if you need anything else.",
    );
    let app = app_with_text_gen(text_gen);

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": ["Q1?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["answers"], json!(["from the text"]));
}

#[tokio::test]
async fn test_output_without_json_is_a_500_envelope() {
    let text_gen = ScriptedTextGen::new("I am sorry, I cannot answer that.");
    let app = app_with_text_gen(text_gen);

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": ["Q1?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "content distribution failed");
    // No provider detail leaks from this endpoint
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_provider_failure_is_a_generic_500() {
    let app = app_with_text_gen(Arc::new(FailingTextGen));

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": ["Q1?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "content distribution failed");
    assert!(!body["error"].as_str().unwrap().contains("quota"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_missing_questions_field_is_400_without_provider_call() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": []}"#);
    let app = app_with_text_gen(text_gen.clone());

    let response = app
        .oneshot(distribute_request(json!({ "text": "only text" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(text_gen.calls(), 0);
}

#[tokio::test]
async fn test_empty_question_list_is_400_without_provider_call() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": []}"#);
    let app = app_with_text_gen(text_gen.clone());

    let response = app
        .oneshot(distribute_request(json!({
            "text": "Some source document.",
            "questions": []
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_gen.calls(), 0);
}

#[tokio::test]
async fn test_blank_text_is_400_without_provider_call() {
    let text_gen = ScriptedTextGen::new(r#"{"answers": ["x"]}"#);
    let app = app_with_text_gen(text_gen.clone());

    let response = app
        .oneshot(distribute_request(json!({
            "text": "   ",
            "questions": ["Q1?"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text_gen.calls(), 0);
}
