//! Shared harness for HTTP integration tests.
//!
//! Builds the production router (`build_app_router`) over the in-memory
//! store, the in-memory cache and a recording task queue, with three known
//! bearer tokens.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use conference_central::adapters::auth::MockSessionValidator;
use conference_central::adapters::cache::InMemoryMemoCache;
use conference_central::adapters::http::{build_app_router, AppState};
use conference_central::adapters::memory::InMemoryStore;
use conference_central::adapters::tasks::RecordingTaskQueue;
use conference_central::config::ServerConfig;

pub const ORGANIZER: &str = "organizer-token";
pub const ATTENDEE: &str = "attendee-token";
pub const OTHER: &str = "other-token";

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
    pub cache: Arc<InMemoryMemoCache>,
    pub tasks: Arc<RecordingTaskQueue>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let cache = Arc::new(InMemoryMemoCache::new());
        let tasks = Arc::new(RecordingTaskQueue::new());
        let validator = MockSessionValidator::new()
            .with_test_user(ORGANIZER, "organizer")
            .with_test_user(ATTENDEE, "attendee")
            .with_test_user(OTHER, "other");

        let state = AppState {
            profiles: Arc::new(store.clone()),
            conferences: Arc::new(store.clone()),
            sessions: Arc::new(store.clone()),
            ledger: Arc::new(store.clone()),
            tasks: tasks.clone(),
            cache: cache.clone(),
            validator: Arc::new(validator),
        };

        Self {
            router: build_app_router(state, &ServerConfig::default()),
            store,
            cache,
            tasks,
        }
    }

    /// Sends one request and returns the status and the JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, None).await
    }

    /// Creates a conference as the organizer and returns its websafe key.
    pub async fn create_conference(&self, body: Value) -> String {
        let (status, json) = self.post("/api/conference", Some(ORGANIZER), body).await;
        assert_eq!(status, StatusCode::CREATED, "{}", json);
        json["websafeKey"].as_str().unwrap().to_string()
    }

    /// Creates a session as the organizer and returns its websafe key.
    pub async fn create_session(&self, conference_key: &str, mut body: Value) -> String {
        body["websafeConferenceKey"] = Value::String(conference_key.to_string());
        let (status, json) = self.post("/api/session", Some(ORGANIZER), body).await;
        assert_eq!(status, StatusCode::CREATED, "{}", json);
        json["websafeKey"].as_str().unwrap().to_string()
    }
}
