//! Mock image generation provider for integration tests
//!
//! Serves `POST /v1/images/generations` with a configurable canned reply and
//! records every request it receives

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a single image URL
    Url(String),
    /// 200 with an empty `data` array
    Empty,
    /// Arbitrary status with a JSON body
    Error(u16, serde_json::Value),
    /// 200 with a single image URL after a delay
    Slow(Duration, String),
}

/// A request the mock received
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub organization: Option<String>,
    pub body: serde_json::Value,
}

struct MockState {
    reply: Reply,
    requests: Mutex<Vec<Recorded>>,
}

/// Running mock provider, shut down on drop
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockProvider {
    /// Start the mock on a random local port
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/images/generations", routing::post(handle_generation))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to configure as the provider, including `/v1`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

fn image(url: &str) -> serde_json::Value {
    serde_json::json!({
        "created": 1_700_000_000,
        "data": [{ "url": url, "revised_prompt": "A mock image for testing" }]
    })
}

async fn handle_generation(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.requests.lock().unwrap().push(Recorded {
        authorization: header(&headers, "authorization"),
        organization: header(&headers, "openai-organization"),
        body,
    });

    match &state.reply {
        Reply::Url(url) => Json(image(url)).into_response(),
        Reply::Empty => {
            Json(serde_json::json!({ "created": 1_700_000_000, "data": [] })).into_response()
        }
        Reply::Error(status, body) => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(body.clone())).into_response()
        }
        Reply::Slow(delay, url) => {
            tokio::time::sleep(*delay).await;
            Json(image(url)).into_response()
        }
    }
}
