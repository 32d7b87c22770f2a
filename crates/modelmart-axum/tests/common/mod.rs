//! Shared helpers for the router integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use modelmart_axum::bootstrap::{ServerConfig, bootstrap};
use modelmart_axum::routes::create_router;
use modelmart_core::UnknownModelPolicy;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory store.
pub async fn test_app(policy: UnknownModelPolicy) -> Router {
    let config = ServerConfig::in_memory().with_unknown_model_policy(policy);
    let ctx = bootstrap(config.clone()).await.unwrap();
    create_router(ctx, &config.cors)
}

/// Send a request and return the status with the raw body.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Send a request and decode the JSON response.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|b| b.to_string());
    let (status, bytes) = send_raw(app, method, uri, body.as_deref()).await;
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Create a model and return its `_id`.
pub async fn create_model(app: &Router, body: Value) -> String {
    let (status, json) = send(app, Method::POST, "/models", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["_id"].as_str().unwrap().to_string()
}
