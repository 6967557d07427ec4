//! Task service validation tests
//!
//! Validation runs before any repository call, so these cases are
//! decidable with a pool that never connects.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{json_request, response_json, test_state};
use triad::handlers;

#[tokio::test]
async fn test_create_task_priority_too_low() {
    let app = handlers::task_app(test_state());

    let request = json_request("POST", "/tasks/", json!({"title": "Invalid Task", "priority": 0}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    assert!(body["error"]["details"].get("priority").is_some());
}

#[tokio::test]
async fn test_create_task_priority_too_high() {
    let app = handlers::task_app(test_state());

    let request = json_request("POST", "/tasks/", json!({"title": "Invalid Task", "priority": 6}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"]["details"].get("priority").is_some());
}

#[tokio::test]
async fn test_create_task_empty_title_rejected() {
    let app = handlers::task_app(test_state());

    let request = json_request("POST", "/tasks/", json!({"title": ""}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"]["details"].get("title").is_some());
}

#[tokio::test]
async fn test_update_task_priority_validated_before_lookup() {
    let app = handlers::task_app(test_state());

    let request = json_request(
        "PUT",
        "/tasks/5f0c0f1e-0000-0000-0000-000000000000/",
        json!({"priority": 0}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"]["details"].get("priority").is_some());
}

#[tokio::test]
async fn test_patch_task_priority_validated_before_lookup() {
    let app = handlers::task_app(test_state());

    let request = json_request(
        "PATCH",
        "/tasks/5f0c0f1e-0000-0000-0000-000000000000/",
        json!({"priority": 9}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
