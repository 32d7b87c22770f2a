//! Integration tests for the catalog routes.
//!
//! These tests drive the full router against an in-memory store.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use modelmart_core::UnknownModelPolicy;
use serde_json::json;
use tower::ServiceExt;

use common::{create_model, send, send_raw, test_app};

const MISSING_ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";

#[tokio::test]
async fn liveness_endpoints_return_text() {
    let app = test_app(UnknownModelPolicy::Reject).await;

    let (status, body) = send_raw(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"Server is running!");

    let (status, body) = send_raw(&app, Method::GET, "/hello", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"How are you!");
}

#[tokio::test]
async fn list_starts_empty() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let (status, json) = send(&app, Method::GET, "/models", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn create_defaults_purchased_to_zero() {
    let app = test_app(UnknownModelPolicy::Reject).await;

    for body in [
        json!({ "name": "Falcon" }),
        json!({ "name": "Falcon", "purchased": null }),
        json!({ "name": "Falcon", "purchased": 0 }),
        json!({ "name": "Falcon", "purchased": false }),
    ] {
        let (status, json) = send(&app, Method::POST, "/models", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["purchased"], 0);
        assert_eq!(json["name"], "Falcon");
        assert!(json["_id"].is_string());
    }
}

#[tokio::test]
async fn create_keeps_explicit_counter_and_fields() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let body = json!({ "name": "Mistral", "purchased": 7, "tags": ["chat"], "size": 7.2 });

    let (status, created) = send(&app, Method::POST, "/models", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["purchased"], 7);
    assert_eq!(created["tags"], json!(["chat"]));

    let id = created["_id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/models/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_returns_models_in_insertion_order() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let first = create_model(&app, json!({ "name": "a" })).await;
    let second = create_model(&app, json!({ "name": "b" })).await;

    let (_, json) = send(&app, Method::GET, "/models", None).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[tokio::test]
async fn create_rejects_invalid_bodies() {
    let app = test_app(UnknownModelPolicy::Reject).await;

    let (status, json) = send(&app, Method::POST, "/models", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);

    let (status, _) = send(&app, Method::POST, "/models", Some(json!({ "purchased": -1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/models", Some(json!({ "_id": "mine" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_raw(&app, Method::POST, "/models", Some("{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/models", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_merges_fields() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let id = create_model(&app, json!({ "name": "Falcon", "size": 7 })).await;

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/models/{id}"),
        Some(json!({ "size": 40, "license": "apache-2.0" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["_id"], id.as_str());
    assert_eq!(json["name"], "Falcon");
    assert_eq!(json["size"], 40);
    assert_eq!(json["license"], "apache-2.0");
    assert_eq!(json["purchased"], 0);
}

#[tokio::test]
async fn update_rejects_empty_patch() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let id = create_model(&app, json!({ "name": "Falcon" })).await;

    let (status, json) = send(&app, Method::PUT, &format!("/models/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let uri = format!("/models/{MISSING_ID}");

    let (status, json) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Model not found", "status": 404 }));

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_internal_error() {
    let app = test_app(UnknownModelPolicy::Reject).await;

    let (status, json) = send(&app, Method::GET, "/models/not-an-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to fetch model");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/models/not-an-id",
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to update model");

    let (status, json) = send(&app, Method::DELETE, "/models/not-an-id", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to delete model");
}

#[tokio::test]
async fn delete_removes_model() {
    let app = test_app(UnknownModelPolicy::Reject).await;
    let id = create_model(&app, json!({ "name": "Falcon" })).await;
    let uri = format!("/models/{id}");

    let (status, json) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "Model deleted successfully" }));

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = test_app(UnknownModelPolicy::Reject).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/models")
                .header("origin", "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn create_reads_body_without_content_type() {
    let app = test_app(UnknownModelPolicy::Record).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/models")
                .body(Body::from(r#"{"name":"Falcon"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, list) = send(&app, Method::GET, "/models", None).await;
    assert_eq!(list[0]["name"], "Falcon");
}
