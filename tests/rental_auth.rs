//! Rental service authorization tests
//!
//! Every case here must be decided before the service touches the
//! database: unauthenticated mutations are rejected by the extractor and
//! invalid payloads by validation, in both cases ahead of any row
//! lookup. The suite runs against a pool that never connects.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

use common::{authed_json_request, bearer_token, json_request, response_json, test_state};
use triad::handlers;

#[tokio::test]
async fn test_health_check() {
    let app = handlers::rental_app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
}

#[tokio::test]
async fn test_unauthenticated_create_offer_forbidden() {
    let app = handlers::rental_app(test_state());

    let request = json_request(
        "POST",
        "/offers/",
        json!({
            "address": "456 Oak Ave",
            "size": "1BR",
            "property_type": "H",
            "price": 2000
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("FORBIDDEN"));
}

#[tokio::test]
async fn test_unauthenticated_update_offer_forbidden() {
    let app = handlers::rental_app(test_state());

    let request = json_request("PUT", "/offers/1/", json!({"address": "Hacked"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unauthenticated_delete_offer_forbidden() {
    let app = handlers::rental_app(test_state());

    let request = Request::builder()
        .method("DELETE")
        .uri("/offers/1/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = handlers::rental_app(test_state());

    let request = authed_json_request(
        "POST",
        "/offers/",
        "Bearer not-a-real-token",
        json!({"address": "456 Oak Ave"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_authenticated_create_with_bad_size_is_validation_error() {
    let app = handlers::rental_app(test_state());

    let auth = bearer_token(1, "testuser");
    let request = authed_json_request(
        "POST",
        "/offers/",
        &auth,
        json!({"address": "456 Oak Ave", "size": "4BR"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
    assert!(body["error"]["details"].get("size").is_some());
}

#[tokio::test]
async fn test_authenticated_create_with_negative_price_is_validation_error() {
    let app = handlers::rental_app(test_state());

    let auth = bearer_token(1, "testuser");
    let request = authed_json_request("POST", "/offers/", &auth, json!({"price": -1}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"]["details"].get("price").is_some());
}

#[tokio::test]
async fn test_list_offers_does_not_require_token() {
    // Listing is open; with a never-connecting pool the request gets past
    // authorization and fails at the database layer instead of with 403
    let app = handlers::rental_app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/offers/")
                .header(header::ACCEPT, "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::FORBIDDEN);
}
