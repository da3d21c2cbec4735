//! Integration tests for the LLM provider adapters.
//!
//! Each test starts an in-process axum server that plays the vendor API and
//! points a provider at it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde_json::{json, Value};

use detective_game::adapters::ai::{GeminiConfig, GeminiProvider, OpenAIConfig, OpenAIProvider};
use detective_game::ports::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, MessageRole, RequestMetadata,
};

// =============================================================================
// Stub server
// =============================================================================

#[derive(Debug, Clone)]
struct Hit {
    path: String,
    headers: HeaderMap,
    body: Value,
}

#[derive(Clone, Default)]
struct Stub {
    replies: Arc<Mutex<Vec<(StatusCode, Value)>>>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

impl Stub {
    fn replying(replies: Vec<(StatusCode, Value)>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            hits: Arc::default(),
        }
    }

    fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    async fn serve(&self) -> SocketAddr {
        let app = Router::new().fallback(record).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }
}

async fn record(
    State(stub): State<Stub>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    stub.hits.lock().unwrap().push(Hit {
        path: uri.path().to_string(),
        headers,
        body,
    });
    let mut replies = stub.replies.lock().unwrap();
    let (status, reply) = if replies.len() > 1 {
        replies.remove(0)
    } else {
        replies[0].clone()
    };
    (status, Json(reply))
}

fn request() -> CompletionRequest {
    CompletionRequest::new(RequestMetadata::new(None, CompletionPurpose::SuspectReply))
        .with_system_prompt("You are a suspect.")
        .with_message(MessageRole::User, "Where were you?")
        .with_message(MessageRole::Assistant, "At home.")
        .with_message(MessageRole::User, "Alone?")
        .with_max_tokens(400)
        .with_temperature(0.7)
}

fn openai_reply(content: &str) -> Value {
    json!({
        "model": "qwen-plus",
        "choices": [{ "message": { "content": content }, "finish_reason": "stop" }],
        "usage": { "prompt_tokens": 42, "completion_tokens": 7 }
    })
}

fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 30, "candidatesTokenCount": 5 }
    })
}

// =============================================================================
// OpenAI-compatible
// =============================================================================

#[tokio::test]
async fn openai_sends_chat_completion_and_parses_reply() {
    let stub = Stub::replying(vec![(StatusCode::OK, openai_reply("Yes, alone."))]);
    let addr = stub.serve().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new("sk-test")
            .with_provider_name("qwen")
            .with_model("qwen-plus")
            .with_base_url(format!("http://{}/v1/", addr)),
    )
    .unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "Yes, alone.");
    assert_eq!(response.usage.total_tokens, 49);

    let hits = stub.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/v1/chat/completions");
    assert_eq!(hits[0].headers["authorization"], "Bearer sk-test");
    let messages = hits[0].body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[2]["role"], "assistant");
    assert_eq!(hits[0].body["model"], "qwen-plus");
    assert_eq!(hits[0].body["max_tokens"], 400);
}

#[tokio::test]
async fn keyless_local_server_gets_no_authorization_header() {
    let stub = Stub::replying(vec![(StatusCode::OK, openai_reply("Hello."))]);
    let addr = stub.serve().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::keyless()
            .with_provider_name("local")
            .with_base_url(format!("http://{}/v1", addr)),
    )
    .unwrap();

    provider.complete(request()).await.unwrap();

    assert!(stub.hits()[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn openai_retries_server_errors() {
    let stub = Stub::replying(vec![
        (StatusCode::SERVICE_UNAVAILABLE, json!({ "error": { "message": "busy" } })),
        (StatusCode::OK, openai_reply("Finally.")),
    ]);
    let addr = stub.serve().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new("sk-test")
            .with_base_url(format!("http://{}/v1", addr))
            .with_retry_base_delay(Duration::from_millis(1)),
    )
    .unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "Finally.");
    assert_eq!(stub.hits().len(), 2);
}

#[tokio::test]
async fn openai_rate_limit_wait_is_capped() {
    let stub = Stub::replying(vec![
        (
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "error": { "message": "Rate limit exceeded. Please try again in 20 seconds." } }),
        ),
        (StatusCode::OK, openai_reply("Sorry for the wait.")),
    ]);
    let addr = stub.serve().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new("sk-test")
            .with_base_url(format!("http://{}/v1", addr))
            .with_retry_base_delay(Duration::from_millis(1))
            .with_retry_max_delay(Duration::from_millis(30)),
    )
    .unwrap();

    let started = std::time::Instant::now();
    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "Sorry for the wait.");
    assert_eq!(stub.hits().len(), 2);
    assert!(started.elapsed() >= Duration::from_millis(30));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn openai_gives_up_after_max_retries() {
    let stub = Stub::replying(vec![(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "boom" } }),
    )]);
    let addr = stub.serve().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new("sk-test")
            .with_base_url(format!("http://{}/v1", addr))
            .with_max_retries(2)
            .with_retry_base_delay(Duration::from_millis(1)),
    )
    .unwrap();

    let err = provider.complete(request()).await.unwrap_err();

    assert!(matches!(err, AIError::Unavailable { .. }));
    assert_eq!(stub.hits().len(), 3);
}

#[tokio::test]
async fn openai_does_not_retry_bad_credentials() {
    let stub = Stub::replying(vec![(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "bad key" } }),
    )]);
    let addr = stub.serve().await;
    let provider = OpenAIProvider::new(
        OpenAIConfig::new("sk-wrong")
            .with_base_url(format!("http://{}/v1", addr))
            .with_retry_base_delay(Duration::from_millis(1)),
    )
    .unwrap();

    let err = provider.complete(request()).await.unwrap_err();

    assert!(matches!(err, AIError::AuthenticationFailed));
    assert_eq!(stub.hits().len(), 1);
}

// =============================================================================
// Gemini
// =============================================================================

#[tokio::test]
async fn gemini_sends_generate_content_and_parses_reply() {
    let stub = Stub::replying(vec![(StatusCode::OK, gemini_reply("Quite alone."))]);
    let addr = stub.serve().await;
    let provider = GeminiProvider::new(
        GeminiConfig::new("g-key")
            .with_model("gemini-test")
            .with_base_url(format!("http://{}/v1beta", addr)),
    )
    .unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "Quite alone.");
    assert_eq!(response.usage.total_tokens, 35);

    let hits = stub.hits();
    assert_eq!(hits[0].path, "/v1beta/models/gemini-test:generateContent");
    assert_eq!(hits[0].headers["x-goog-api-key"], "g-key");
    let body = &hits[0].body;
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are a suspect.");
    assert_eq!(body["contents"].as_array().unwrap().len(), 3);
    assert_eq!(body["contents"][1]["role"], "model");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 400);
}

#[tokio::test]
async fn gemini_blocked_prompt_is_content_filtered() {
    let stub = Stub::replying(vec![(
        StatusCode::OK,
        json!({ "promptFeedback": { "blockReason": "SAFETY" } }),
    )]);
    let addr = stub.serve().await;
    let provider = GeminiProvider::new(
        GeminiConfig::new("g-key").with_base_url(format!("http://{}/v1beta", addr)),
    )
    .unwrap();

    let err = provider.complete(request()).await.unwrap_err();

    assert!(matches!(err, AIError::ContentFiltered { .. }));
}

#[tokio::test]
async fn gemini_retries_rate_limits() {
    let stub = Stub::replying(vec![
        (StatusCode::TOO_MANY_REQUESTS, json!({ "error": { "message": "slow down" } })),
        (StatusCode::OK, gemini_reply("Here.")),
    ]);
    let addr = stub.serve().await;
    let provider = GeminiProvider::new(
        GeminiConfig::new("g-key")
            .with_base_url(format!("http://{}/v1beta", addr))
            .with_retry_base_delay(Duration::from_millis(1))
            .with_retry_max_delay(Duration::from_millis(20)),
    )
    .unwrap();

    let response = provider.complete(request()).await.unwrap();

    assert_eq!(response.content, "Here.");
    assert_eq!(stub.hits().len(), 2);
}
