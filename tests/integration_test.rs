//! Integration tests for the Gemini bridge adapters
//!
//! These run both adapters against a local stub of the Gemini API, so no
//! network access or real API key is required.

use gemini_bridge::{
    completion::{CompletionAdapter, CompletionProvider, CompletionRequest, ConversationTurn},
    config::{CompletionConfig, Config, EmbeddingConfig, EmbeddingMode, GeminiConfig},
    embedding::EmbeddingAdapter,
    error::{ApiError, BridgeError, EmbeddingError},
    gemini::GeminiClient,
};
use mockito::Matcher;
use secrecy::Secret;
use serde_json::json;
use std::sync::Arc;

fn test_gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: base_url.to_string(),
        api_key: Secret::new("test-key".to_string()),
        timeout_secs: 5,
    }
}

fn test_embedding_config(mode: EmbeddingMode) -> EmbeddingConfig {
    EmbeddingConfig {
        model: "text-embedding-004".to_string(),
        dimension: 768,
        mode,
        batch_size: 32,
        cache_enabled: false,
        cache_ttl_secs: 3600,
        cache_size: 1000,
    }
}

fn completion_adapter(base_url: &str) -> CompletionAdapter {
    let client = Arc::new(GeminiClient::with_http_client(
        &test_gemini_config(base_url),
        reqwest::Client::new(),
    ));
    let config = CompletionConfig {
        model: "gemini-1.5-flash".to_string(),
    };
    CompletionAdapter::new(client, config)
}

fn embedding_adapter(base_url: &str, mode: EmbeddingMode) -> EmbeddingAdapter {
    let client = Arc::new(GeminiClient::with_http_client(
        &test_gemini_config(base_url),
        reqwest::Client::new(),
    ));
    EmbeddingAdapter::new(client, test_embedding_config(mode))
}

/// Stub that echoes the text of the last message in the request
fn echo_body(request: &mockito::Request) -> Vec<u8> {
    let body: serde_json::Value =
        serde_json::from_slice(request.body().expect("request body")).expect("json body");
    let last_text = body["contents"]
        .as_array()
        .and_then(|contents| contents.last())
        .and_then(|content| content["parts"][0]["text"].as_str())
        .expect("last message text")
        .to_string();

    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": last_text}]}
        }]
    })
    .to_string()
    .into_bytes()
}

#[tokio::test]
async fn test_complete_returns_echoed_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(echo_body)
        .create_async()
        .await;

    let adapter = completion_adapter(&server.url());
    let answer = adapter
        .complete(CompletionRequest::new("What is 2+2?"))
        .await
        .expect("completion");

    assert_eq!(answer, "What is 2+2?");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_complete_sends_history_and_system_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_body(Matcher::Json(json!({
            "contents": [
                {"role": "user", "parts": [{"text": "hello"}]},
                {"role": "model", "parts": [{"text": "hi there"}]},
                {"role": "user", "parts": [{"text": "and now?"}]}
            ],
            "systemInstruction": {"parts": [{"text": "be brief"}]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "ok"}]}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let adapter = completion_adapter(&server.url());
    let request = CompletionRequest::new("and now?")
        .with_system_prompt("be brief")
        .with_history(vec![
            ConversationTurn::user("hello").into(),
            ConversationTurn::assistant("hi there").into(),
        ]);

    let answer = adapter.complete(request).await.expect("completion");

    assert_eq!(answer, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_embed_single_string_yields_one_zero_row() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embedding": {"values": vec![0.0_f32; 768]}}).to_string())
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Sequential);
    let rows = adapter.embed("hello").await.expect("embedding");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 768);
    assert!(rows[0].iter().all(|v| *v == 0.0));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_embed_two_texts_yields_two_rows_one_call_each() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embedding": {"values": vec![0.0_f32; 768]}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Sequential);
    let rows = adapter
        .embed(vec!["a", "b"])
        .await
        .expect("embedding");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
    assert_eq!(rows[0], vec![0.0_f32; 768]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_embed_rows_match_input_order() {
    let mut server = mockito::Server::new_async().await;
    let mock_a = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .match_body(Matcher::PartialJson(json!({
            "content": {"parts": [{"text": "first"}]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embedding": {"values": [1.0, 0.0]}}).to_string())
        .create_async()
        .await;
    let mock_b = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .match_body(Matcher::PartialJson(json!({
            "content": {"parts": [{"text": "second"}]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embedding": {"values": [0.0, 1.0]}}).to_string())
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Sequential);
    let rows = adapter
        .embed(vec!["first", "second"])
        .await
        .expect("embedding");

    assert_eq!(rows, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    mock_a.assert_async().await;
    mock_b.assert_async().await;
}

#[tokio::test]
async fn test_embed_same_text_twice_is_idempotent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embedding": {"values": [0.25, -0.5, 0.75]}}).to_string())
        .expect(2)
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Sequential);
    let first = adapter.embed("hello").await.expect("first call");
    let second = adapter.embed("hello").await.expect("second call");

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_embed_accepts_empty_string() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embedding": {"values": [0.0, 0.0]}}).to_string())
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Sequential);
    let rows = adapter.embed("").await.expect("embedding");

    assert_eq!(rows.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_batched_mode_uses_one_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:batchEmbedContents")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "embeddings": [
                    {"values": [1.0, 0.0]},
                    {"values": [0.0, 1.0]}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Batched);
    let rows = adapter
        .embed(vec!["first", "second"])
        .await
        .expect("embedding");

    assert_eq!(rows, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_batched_mode_detects_count_mismatch() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:batchEmbedContents")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"embeddings": [{"values": [1.0]}]}).to_string())
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Batched);
    let result = adapter.embed(vec!["first", "second"]).await;

    assert!(matches!(
        result,
        Err(BridgeError::Embedding(EmbeddingError::CountMismatch {
            expected: 2,
            actual: 1
        }))
    ));
}

#[tokio::test]
async fn test_provider_error_propagates_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let adapter = completion_adapter(&server.url());
    let result = adapter.complete(CompletionRequest::new("hi")).await;

    assert!(matches!(
        result,
        Err(BridgeError::Api(ApiError::Provider { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:embedContent")
        .with_status(401)
        .create_async()
        .await;

    let adapter = embedding_adapter(&server.url(), EmbeddingMode::Sequential);
    let result = adapter.embed("hello").await;

    assert!(matches!(
        result,
        Err(BridgeError::Api(ApiError::AuthenticationFailed))
    ));
}

#[test]
fn test_missing_api_key_fails_before_any_network_call() {
    let mut config = Config::default_config();
    config.gemini.api_key = Secret::new(String::new());

    let err = config.validate().unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}
