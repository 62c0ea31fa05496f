use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use translation_gateway::backend::{GroqBackend, TranslationBackend};
use translation_gateway::config::{GroqConfig, TranslationSettings};
use translation_gateway::error::BackendError;

/// What the mock chat endpoint saw on its last request.
#[derive(Default)]
struct Captured {
    authorization: Option<String>,
    body: Option<Value>,
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn backend(base_url: &str) -> GroqBackend {
    let config = GroqConfig {
        api_key: "gsk_test".to_string(),
        model: "llama3-70b-8192".to_string(),
        base_url: base_url.to_string(),
    };
    GroqBackend::new(&config, Duration::from_secs(5), Duration::from_secs(2)).unwrap()
}

/// Chat endpoint that records the request and answers with `reply`.
fn chat_router(captured: Arc<Mutex<Captured>>, reply: Value) -> Router {
    Router::new().route(
        "/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let captured = captured.clone();
            let reply = reply.clone();
            async move {
                let mut seen = captured.lock().unwrap();
                seen.authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                seen.body = Some(body);
                Json(reply)
            }
        }),
    )
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn test_probe_sends_short_health_request() {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let url = spawn_server(chat_router(captured.clone(), completion(json!("Hi")))).await;

    backend(&url).probe().await.unwrap();

    let seen = captured.lock().unwrap();
    assert_eq!(seen.authorization.as_deref(), Some("Bearer gsk_test"));
    let body = seen.body.as_ref().unwrap();
    assert_eq!(body["model"], "llama3-70b-8192");
    assert_eq!(body["max_tokens"], 10);
    assert_eq!(body["messages"][0]["content"], "Hello");
    assert!(body.get("top_p").is_none());
}

#[tokio::test]
async fn test_complete_sends_generation_settings() {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let url = spawn_server(chat_router(captured.clone(), completion(json!("Hola mundo")))).await;

    let text = backend(&url)
        .complete("Translate this", &TranslationSettings::default())
        .await
        .unwrap();
    assert_eq!(text, "Hola mundo");

    let seen = captured.lock().unwrap();
    assert_eq!(seen.authorization.as_deref(), Some("Bearer gsk_test"));
    let body = seen.body.as_ref().unwrap();
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Translate this");
    assert_eq!(body["max_tokens"], 500);
    assert!((body["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert!((body["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let url = spawn_server(chat_router(captured.clone(), completion(json!("ok")))).await;

    assert!(backend(&format!("{}/", url)).is_available().await);
    assert!(captured.lock().unwrap().body.is_some());
}

#[tokio::test]
async fn test_non_success_status() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
    );
    let url = spawn_server(router).await;
    let groq = backend(&url);

    match groq.complete("Translate", &TranslationSettings::default()).await {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS);
            assert_eq!(body, "rate limited");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(!groq.is_available().await);
}

#[tokio::test]
async fn test_empty_choices_is_decode_error() {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let url = spawn_server(chat_router(captured, json!({ "choices": [] }))).await;

    let result = backend(&url)
        .complete("Translate", &TranslationSettings::default())
        .await;
    assert!(matches!(result, Err(BackendError::Decode(_))));
}

#[tokio::test]
async fn test_null_content_is_decode_error() {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let url = spawn_server(chat_router(captured, completion(Value::Null))).await;
    let groq = backend(&url);

    let result = groq.complete("Translate", &TranslationSettings::default()).await;
    assert!(matches!(result, Err(BackendError::Decode(_))));
    assert!(matches!(groq.probe().await, Err(BackendError::Decode(_))));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let router = Router::new().route("/chat/completions", post(|| async { "not json" }));
    let url = spawn_server(router).await;

    let result = backend(&url)
        .complete("Translate", &TranslationSettings::default())
        .await;
    assert!(matches!(result, Err(BackendError::Decode(_))));
}
