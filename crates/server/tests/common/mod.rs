//! # Common Test Utilities
//!
//! `TestApp` spawns the real server on a random port with all three backends
//! pointed at one `wiremock::MockServer`, plus helpers to mount canned
//! backend responses on it.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use civic_intel_server::{config, router, state::build_app_state};
use civic_intel_test_utils::setup_tracing;
use reqwest::Client;
use serde_json::{json, Value};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";
pub const GEMINI_MAPS_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const SERPER_PATH: &str = "/search";
pub const DEEPSEEK_PATH: &str = "/v1/chat/completions";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        setup_tracing();
        let mock_server = MockServer::start().await;

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
providers:
  primary:
    api_key: "test-gemini-key"
    api_base: "{base}/v1beta"
  search:
    api_key: "test-serp-key"
    api_url: "{base}{SERPER_PATH}"
  fallback:
    api_key: "test-deepseek-key"
    api_url: "{base}{DEEPSEEK_PATH}"
"#,
            base = mock_server.uri()
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config_path = config_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("temp path is not valid UTF-8"))?;
        let config = config::get_config(Some(config_path))?;
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, route: &str) -> String {
        format!("{}{route}", self.address)
    }

    /// Number of requests the mock backends received on `route`.
    pub async fn backend_hits(&self, route: &str) -> usize {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == route)
            .count()
    }

    /// JSON bodies the mock backends received on `route`.
    pub async fn backend_bodies(&self, route: &str) -> Vec<Value> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == route)
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// --- Backend response helpers ---

/// A `generateContent` response with the given text and web citations.
pub fn gemini_body(text: &str, web: &[(&str, &str)]) -> Value {
    let chunks: Vec<Value> = web
        .iter()
        .map(|(title, uri)| json!({ "web": { "title": title, "uri": uri } }))
        .collect();
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] },
            "groundingMetadata": { "groundingChunks": chunks }
        }]
    })
}

pub async fn mount_gemini(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_gemini_failure(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("backend unavailable"))
        .mount(server)
        .await;
}

pub async fn mount_serper(server: &MockServer, organic: Value) {
    Mock::given(method("POST"))
        .and(path(SERPER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": organic })))
        .mount(server)
        .await;
}

pub async fn mount_serper_failure(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SERPER_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

pub async fn mount_deepseek(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(DEEPSEEK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })))
        .mount(server)
        .await;
}
