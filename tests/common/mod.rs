//! Shared helpers for in-process router tests
//!
//! The pool is created lazily and never actually connects: these tests
//! only exercise the paths that must reject before any database work
//! (missing credentials, field validation).

// Each test binary compiles this module separately and uses a subset.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, header};
use sqlx::postgres::PgPoolOptions;

use triad::config::{Config, DatabaseConfig, JwtConfig, ServerConfig};
use triad::models::User;
use triad::services::AuthService;
use triad::state::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://postgres@localhost:5432/triad_test".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: 1,
        },
    }
}

pub fn test_state() -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_lazy(&config.database.url)
        .expect("lazy pool");

    AppState::new(pool, config)
}

/// Mint a bearer token for a synthetic user
pub fn bearer_token(user_id: i64, username: &str) -> String {
    let user = User {
        id: user_id,
        username: username.to_string(),
    };
    let token = AuthService::generate_access_token(&user, &test_config()).expect("token");
    format!("Bearer {token}")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn authed_json_request(
    method: &str,
    uri: &str,
    auth: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, auth)
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
