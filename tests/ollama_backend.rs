use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use translation_gateway::backend::{OllamaBackend, TranslationBackend};
use translation_gateway::config::{OllamaConfig, TranslationSettings};
use translation_gateway::error::BackendError;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn backend(base_url: &str, model: &str) -> OllamaBackend {
    let config = OllamaConfig {
        base_url: base_url.to_string(),
        model: model.to_string(),
    };
    OllamaBackend::new(&config, Duration::from_secs(5), Duration::from_secs(2)).unwrap()
}

fn tags_router(names: &'static [&'static str]) -> Router {
    Router::new().route(
        "/api/tags",
        get(move || async move {
            let models: Vec<Value> = names
                .iter()
                .map(|n| json!({"name": n, "size": 1024}))
                .collect();
            Json(json!({ "models": models }))
        }),
    )
}

#[tokio::test]
async fn test_probe_finds_installed_model() {
    let url = spawn_server(tags_router(&["llama3.2:3b", "mistral:7b"])).await;

    assert!(backend(&url, "mistral:latest").is_available().await);
    assert!(backend(&url, "llama3.2:3b").is_available().await);
}

#[tokio::test]
async fn test_probe_reports_missing_model() {
    let url = spawn_server(tags_router(&["llama3.2:3b"])).await;
    let ollama = backend(&url, "mistral:latest");

    assert!(matches!(ollama.probe().await, Err(BackendError::ModelNotInstalled(_))));
    assert!(!ollama.is_available().await);
}

#[tokio::test]
async fn test_probe_non_success_status() {
    let router = Router::new().route(
        "/api/tags",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn_server(router).await;

    let result = backend(&url, "mistral:latest").probe().await;
    assert!(matches!(result, Err(BackendError::Status { .. })));
}

#[tokio::test]
async fn test_probe_unreachable_server() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let ollama = backend(&format!("http://{}", addr), "mistral:latest");
    assert!(matches!(ollama.probe().await, Err(BackendError::Transport(_))));
    assert!(!ollama.is_available().await);
}

#[tokio::test]
async fn test_generate_sends_expected_payload() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();

    let router = Router::new().route(
        "/api/generate",
        post(move |Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(body);
                Json(json!({
                    "model": "mistral:latest",
                    "response": " \"Hola mundo\" ",
                    "done": true
                }))
            }
        }),
    );
    let url = spawn_server(router).await;

    let settings = TranslationSettings::default();
    let text = backend(&url, "mistral:latest")
        .complete("Translate this", &settings)
        .await
        .unwrap();
    assert_eq!(text, " \"Hola mundo\" ");

    let body = seen.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "mistral:latest");
    assert_eq!(body["prompt"], "Translate this");
    assert_eq!(body["stream"], false);
    assert_eq!(body["options"]["max_tokens"], 500);
    assert!((body["options"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
}

#[tokio::test]
async fn test_generate_error_status() {
    let router = Router::new().route(
        "/api/generate",
        post(|| async { (StatusCode::NOT_FOUND, "model not found") }),
    );
    let url = spawn_server(router).await;

    let result = backend(&url, "mistral:latest")
        .complete("Translate this", &TranslationSettings::default())
        .await;
    match result {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "model not found");
        }
        other => panic!("expected status error, got {:?}", other.map(|_| ())),
    }
}
