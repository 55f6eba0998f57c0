// Mock Directory HTTP Server for Integration Testing
//
// A single axum server stands in for the chains, status and validators
// hosts. Tests point each endpoint at a path prefix on it (`/chains`,
// `/status`, `/validators`) and register documents by raw request path.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::{net::TcpListener, task::JoinHandle};

pub const API_KEY_HEADER: &str = "x-api-key";

/// A request as the server saw it, before any percent-decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct MockState {
    bodies: Arc<Mutex<HashMap<String, String>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    required_api_key: Arc<Mutex<Option<String>>>,
}

#[derive(Debug)]
pub struct MockDirectory {
    state: MockState,
    addr: SocketAddr,
    server_handle: Option<JoinHandle<()>>,
}

impl MockDirectory {
    /// Starts the server on an ephemeral localhost port.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let state = MockState::default();
        let app = Router::new().fallback(serve_document).with_state(state.clone());
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Failed to run mock directory");
        });

        Ok(Self {
            state,
            addr,
            server_handle: Some(server_handle),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn chains_endpoint(&self) -> String {
        format!("{}/chains", self.base_url())
    }

    pub fn status_endpoint(&self) -> String {
        format!("{}/status", self.base_url())
    }

    pub fn validators_endpoint(&self) -> String {
        format!("{}/validators", self.base_url())
    }

    pub fn serve_json(&self, path: &str, document: &Value) {
        self.serve_raw(path, document.to_string());
    }

    pub fn serve_raw(&self, path: &str, body: impl Into<String>) {
        self.state.bodies.lock().unwrap().insert(path.to_string(), body.into());
    }

    /// The document registered at `path`, for tests that tweak a fixture.
    pub fn document(&self, path: &str) -> Option<Value> {
        let bodies = self.state.bodies.lock().unwrap();
        bodies.get(path).and_then(|body| serde_json::from_str(body).ok())
    }

    pub fn require_api_key(&self, key: &str) {
        *self.state.required_api_key.lock().unwrap() = Some(key.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> usize {
        self.requests().iter().filter(|request| request.path == path).count()
    }
}

impl Drop for MockDirectory {
    fn drop(&mut self) {
        if let Some(handle) = self.server_handle.take() {
            handle.abort();
        }
    }
}

async fn serve_document(State(state): State<MockState>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        api_key: api_key.clone(),
    });

    let required = state.required_api_key.lock().unwrap().clone();
    if let Some(required) = required {
        if api_key.as_deref() != Some(required.as_str()) {
            return (StatusCode::UNAUTHORIZED, "Missing or wrong API key").into_response();
        }
    }

    let body = state.bodies.lock().unwrap().get(&path).cloned();
    match body {
        Some(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
