//! Integration tests for the root and health endpoints.

mod helpers;

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use helpers::{FailingProductStore, TestApp};

#[tokio::test]
async fn test_api_root() {
    let app = TestApp::new();

    let response = app.request("GET", "/api", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "Desde API" }));
}

#[tokio::test]
async fn test_health_with_store_up() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "up");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_health_with_store_down() {
    let app = TestApp::with_store(Arc::new(FailingProductStore));

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["store"], "down");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/orders", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
