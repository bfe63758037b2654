//! End-to-end HTTP tests: bind an ephemeral listener and exercise the
//! real server with reqwest.

use std::sync::Arc;

use {
    flowwisper_config::Settings, flowwisper_gateway::server::build_app,
    flowwisper_sessions::PlaceholderSessionStore,
};

use serde_json::json;

/// Serve the gateway on an ephemeral port; returns the base URL.
async fn spawn_gateway(settings: Settings) -> String {
    let app = build_app(Arc::new(settings), Arc::new(PlaceholderSessionStore));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_gateway(Settings::default()).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn list_sessions_returns_empty_list() {
    let base = spawn_gateway(Settings::default()).await;
    let resp = reqwest::get(format!("{base}/api/v1/sessions")).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "sessions": [] }));
}

#[tokio::test]
async fn create_session_returns_placeholder_id() {
    let base = spawn_gateway(Settings::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/v1/sessions"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "session_id": "demo" }));
}

#[tokio::test]
async fn repeated_creates_are_indistinguishable() {
    let base = spawn_gateway(Settings::default()).await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let resp = client
            .post(format!("{base}/api/v1/sessions"))
            .body(r#"{"ignored":"payload"}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "session_id": "demo" }));
    }
}

#[tokio::test]
async fn version_prefix_is_isolated() {
    let settings = Settings {
        api_version: "v2".into(),
        ..Settings::default()
    };
    let base = spawn_gateway(settings).await;

    let resp = reqwest::get(format!("{base}/api/v2/sessions")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = reqwest::get(format!("{base}/api/v1/sessions")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn cors_headers_reflect_configured_origin() {
    let base = spawn_gateway(Settings::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/v1/sessions"))
        .header("origin", "http://localhost:1420")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:1420")
    );
    assert_eq!(
        resp.headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn cors_ignores_unconfigured_origin() {
    let base = spawn_gateway(Settings::default()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/healthz"))
        .header("origin", "https://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn unknown_paths_fall_through_to_404() {
    let base = spawn_gateway(Settings::default()).await;
    let resp = reqwest::get(format!("{base}/api/v1/unknown")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
