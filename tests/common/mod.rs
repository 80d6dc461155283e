//! In-process mock of the trading backend, served by axum on an ephemeral port.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use futures::channel::mpsc::UnboundedReceiver;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use tradedesk::prelude::*;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Malformed,
}

impl Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(v) => Json(v).into_response(),
            Reply::Status(code) => {
                let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, "mock failure").into_response()
            }
            Reply::Malformed => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                "{\"success\": tru",
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scripted {
    pub delay: Duration,
    pub reply: Reply,
}

impl Scripted {
    pub fn now(reply: Reply) -> Self {
        Self {
            delay: Duration::ZERO,
            reply,
        }
    }

    pub fn after(ms: u64, reply: Reply) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            reply,
        }
    }
}

#[derive(Default)]
pub struct MockBackend {
    login: Mutex<VecDeque<Scripted>>,
    start: Mutex<VecDeque<Scripted>>,
    views: Mutex<HashMap<View, VecDeque<Scripted>>>,
    pub login_bodies: Mutex<Vec<Value>>,
    pub start_calls: AtomicUsize,
    view_calls: Mutex<HashMap<View, usize>>,
}

impl MockBackend {
    pub fn script_login(&self, step: Scripted) {
        self.login.lock().unwrap().push_back(step);
    }

    pub fn script_start(&self, step: Scripted) {
        self.start.lock().unwrap().push_back(step);
    }

    pub fn script_view(&self, view: View, step: Scripted) {
        self.views
            .lock()
            .unwrap()
            .entry(view)
            .or_default()
            .push_back(step);
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn view_calls(&self, view: View) -> usize {
        self.view_calls
            .lock()
            .unwrap()
            .get(&view)
            .copied()
            .unwrap_or(0)
    }

    fn next(queue: &Mutex<VecDeque<Scripted>>, fallback: Reply) -> Scripted {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Scripted::now(fallback))
    }
}

async fn play(step: Scripted) -> Response {
    if !step.delay.is_zero() {
        tokio::time::sleep(step.delay).await;
    }
    step.reply.into_response()
}

async fn login(State(mock): State<Arc<MockBackend>>, Json(body): Json<Value>) -> Response {
    mock.login_bodies.lock().unwrap().push(body);
    let step = MockBackend::next(&mock.login, Reply::Json(json!({"success": true})));
    play(step).await
}

async fn start_backend(State(mock): State<Arc<MockBackend>>) -> Response {
    mock.start_calls.fetch_add(1, Ordering::SeqCst);
    let step = MockBackend::next(&mock.start, Reply::Json(json!({"success": true})));
    play(step).await
}

async fn serve_view(mock: Arc<MockBackend>, view: View) -> Response {
    *mock.view_calls.lock().unwrap().entry(view).or_default() += 1;
    let step = {
        let mut views = mock.views.lock().unwrap();
        views
            .entry(view)
            .or_default()
            .pop_front()
            .unwrap_or_else(|| Scripted::now(Reply::Json(view.empty_payload())))
    };
    play(step).await
}

/// Start the mock; returns its base URL and a handle for scripting and inspection.
pub async fn spawn_backend() -> (String, Arc<MockBackend>) {
    let mock = Arc::new(MockBackend::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/api/login", post(login))
        .route("/api/start-backend", post(start_backend))
        .route(
            "/api/orderbook",
            get(|State(m): State<Arc<MockBackend>>| serve_view(m, View::OrderBook)),
        )
        .route(
            "/api/tradebook",
            get(|State(m): State<Arc<MockBackend>>| serve_view(m, View::TradeBook)),
        )
        .route(
            "/api/profile",
            get(|State(m): State<Arc<MockBackend>>| serve_view(m, View::Profile)),
        )
        .with_state(mock.clone());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{}", addr), mock)
}

pub fn client(base_url: &str) -> TradeDeskClient {
    TradeDeskClient::builder()
        .base_url(base_url)
        .build()
        .unwrap()
}

/// Everything emitted so far.
pub fn drain(rx: &mut UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
    let mut events = Vec::new();
    while let Ok(Some(event)) = rx.try_next() {
        events.push(event);
    }
    events
}

pub fn notifications(events: &[UiEvent]) -> Vec<Notification> {
    events
        .iter()
        .filter_map(|e| e.as_notification().cloned())
        .collect()
}
