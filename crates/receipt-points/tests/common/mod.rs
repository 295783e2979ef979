//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::Router;
use receipt_points::api::{create_router, AppState};
use receipt_points::{PointsService, ServiceConfig};
use receipt_points_store::MemoryStore;
use receipt_points_testkit::SequentialIds;
use serde_json::Value;

pub use axum::body::Body;
pub use axum::http::{Request, StatusCode};
pub use std::sync::Arc;
pub use tower::ServiceExt;

/// A service over an empty in-memory store with ids `receipt-1`, `receipt-2`, ...
pub fn test_service() -> Arc<PointsService> {
    Arc::new(PointsService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(SequentialIds::new("receipt")),
        ServiceConfig::default(),
    ))
}

/// Create a test app with an empty store
pub fn test_app() -> Router {
    create_router(AppState::new(test_service()))
}

/// Create a test app sharing `service`, so tests can inspect it afterwards
pub fn test_app_with(service: Arc<PointsService>) -> Router {
    create_router(AppState::new(service))
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}
