//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use actlog_api::{AppState, build_app};
use actlog_core::config::AppConfig;
use actlog_core::types::{PageRequest, UserLogId};
use actlog_database::{LogStore, MemoryLogStore};
use actlog_entity::user_log::{LogFilter, NewUserLog, UserLog};

/// Who the request claims to come from.
#[derive(Debug, Clone, Copy)]
pub enum Caller<'a> {
    /// No identity headers at all.
    Anonymous,
    /// `ROLE_ADMIN`
    Admin(&'a str),
    /// `ROLE_USER`
    User(&'a str),
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for seeding and assertions
    pub store: Arc<MemoryLogStore>,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryLogStore::new());
        let state = AppState::new(config, store.clone());
        Self {
            router: build_app(state),
            store,
        }
    }

    /// Record an entry directly in the store
    pub async fn seed(&self, entry: NewUserLog) -> UserLogId {
        self.store.record(entry).await.expect("Failed to seed entry")
    }

    /// Every stored entry, most recent first
    pub async fn entries(&self) -> Vec<UserLog> {
        self.store
            .list(&LogFilter::all(), &PageRequest::new(1, 100))
            .await
            .expect("Failed to list entries")
            .items
    }

    /// Send a request and collect the response
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        caller: Caller<'_>,
    ) -> TestResponse {
        self.request_with_headers(method, path, body, caller, &[])
            .await
    }

    /// Send a request with extra headers and collect the response
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        caller: Caller<'_>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        match caller {
            Caller::Anonymous => {}
            Caller::Admin(username) => {
                req = req
                    .header("x-auth-user", username)
                    .header("x-auth-role", "ROLE_ADMIN");
            }
            Caller::User(username) => {
                req = req
                    .header("x-auth-user", username)
                    .header("x-auth-role", "ROLE_USER");
            }
        }

        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Content-Type` header
    pub content_type: String,
    /// Raw body
    pub text: String,
    /// Parsed JSON body, `Null` for non-JSON responses
    pub body: Value,
}

impl TestResponse {
    /// Text of every `<h3 class="box-title">` on the page
    pub fn box_titles(&self) -> Vec<&str> {
        const OPEN: &str = "<h3 class=\"box-title\">";
        self.text
            .split(OPEN)
            .skip(1)
            .filter_map(|rest| rest.split("</h3>").next())
            .collect()
    }
}
