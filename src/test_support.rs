//! In-process fake of the password analysis backend for tests.

use std::sync::{Arc, Mutex};

use std::time::Duration;

use axum::Router;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::sync::Notify;

#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    requests: Arc<Mutex<Vec<Value>>>,
    fail: bool,
    staggered: bool,
    brute_force_release: Option<Arc<Notify>>,
}

impl FakeBackend {
    /// Every endpoint answers HTTP 500.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// `/check-password` echoes the password length and answers shorter
    /// passwords more slowly.
    pub(crate) fn staggered() -> Self {
        Self {
            staggered: true,
            ..Default::default()
        }
    }

    /// `/brute-force` blocks until `release` is notified.
    pub(crate) fn gated(release: Arc<Notify>) -> Self {
        Self {
            brute_force_release: Some(release),
            ..Default::default()
        }
    }

    pub(crate) fn last_request(&self) -> Option<Value> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record(&self, body: Value) {
        self.requests.lock().unwrap().push(body);
    }

    pub(crate) fn router(&self) -> Router {
        Router::new()
            .route("/check-password", post(check_password))
            .route("/check-strength", post(check_strength))
            .route("/brute-force", post(brute_force))
            .route("/health", get(health))
            .with_state(self.clone())
    }
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": "analysis backend unavailable"})),
    )
        .into_response()
}

async fn check_password(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    let mut length = 11;
    if backend.staggered {
        length = body["password"].as_str().unwrap_or_default().chars().count();
        let delay = 40 * 8u64.saturating_sub(length as u64);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    backend.record(body);
    if backend.fail {
        return failure();
    }
    Json(json!({
        "length": length,
        "has_upper": true,
        "has_lower": true,
        "has_digit": true,
        "has_symbol": true,
        "score": 3,
        "crack_time_display": "3 years",
        "strength_text": "Strong",
        "suggestions": []
    }))
    .into_response()
}

async fn check_strength(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    backend.record(body);
    if backend.fail {
        return failure();
    }
    Json(json!({
        "strength": "Weak",
        "feedback": ["Add another word or two."],
        "suggestion": "hunter2-Copper-Lagoon!"
    }))
    .into_response()
}

async fn brute_force(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    let password = body["password"].as_str().unwrap_or_default().to_string();
    let algorithm = body["algorithm"].as_str().unwrap_or_default().to_string();
    backend.record(body);

    if let Some(release) = &backend.brute_force_release {
        release.notified().await;
    }
    if backend.fail {
        return failure();
    }
    Json(json!({
        "success": true,
        "cracked_password": password,
        "time_taken": 0.0421,
        "attempts": 1234567,
        "algorithm": algorithm
    }))
    .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub(crate) async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port nothing listens on.
pub(crate) fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
