//! Mock item service for testing the HTTP store client.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// How the mock service answers every request.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Behave like a real item store
    Healthy,
    /// Answer every request with this status and body
    Failing(u16, String),
    /// Answer every request with 200 and this raw body
    Garbage(String),
}

#[derive(Clone)]
struct MockState {
    items: Arc<Mutex<Vec<Value>>>,
    posted: Arc<Mutex<Vec<Value>>>,
    mode: Arc<Mutex<Mode>>,
}

/// Mock item service bound to an ephemeral localhost port.
pub struct MockItemService {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockItemService {
    /// Start a healthy service holding `items`.
    pub async fn start(items: Vec<Value>) -> Self {
        let state = MockState {
            items: Arc::new(Mutex::new(items)),
            posted: Arc::new(Mutex::new(Vec::new())),
            mode: Arc::new(Mutex::new(Mode::Healthy)),
        };

        let app = Router::new()
            .route("/items", get(list_items).post(create_item))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_mode(&self, mode: Mode) {
        *self.state.mode.lock().await = mode;
    }

    /// Bodies received by `POST /items`, in order.
    pub async fn posted(&self) -> Vec<Value> {
        self.state.posted.lock().await.clone()
    }
}

/// Accepts connections on an ephemeral port but never writes a response.
pub async fn start_silent_listener() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut open = Vec::new();
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            // Keep the socket alive so the client waits instead of seeing a reset
            open.push(socket);
        }
    });

    addr
}

impl Drop for MockItemService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn override_response(mode: &Mode) -> Option<Response> {
    match mode {
        Mode::Healthy => None,
        Mode::Failing(status, body) => Some(
            (
                StatusCode::from_u16(*status).unwrap(),
                body.clone(),
            )
                .into_response(),
        ),
        Mode::Garbage(body) => Some((StatusCode::OK, body.clone()).into_response()),
    }
}

async fn list_items(State(state): State<MockState>) -> Response {
    let mode = state.mode.lock().await.clone();
    if let Some(resp) = override_response(&mode) {
        return resp;
    }
    Json(state.items.lock().await.clone()).into_response()
}

async fn create_item(State(state): State<MockState>, Json(mut body): Json<Value>) -> Response {
    let mode = state.mode.lock().await.clone();
    if let Some(resp) = override_response(&mode) {
        return resp;
    }
    state.posted.lock().await.push(body.clone());

    let mut items = state.items.lock().await;
    // String ids, the way json-server assigns them
    body["id"] = json!(format!("srv-{}", items.len() + 1));
    items.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}
