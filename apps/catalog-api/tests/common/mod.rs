#![allow(dead_code)]

use aurum_api::{build_app_router, AppConfig, AppState};
use aurum_db::{Database, DbConfig};
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path: ":memory:".to_string(),
        db_max_connections: 1,
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_token_ttl_secs: 900,
        refresh_token_ttl_secs: 604800,
        request_timeout_secs: 30,
        cors_origins: vec![],
    }
}

/// Router over a fresh in-memory database, plus the database for seeding.
pub async fn test_app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");
    let config = test_config();
    let router = build_app_router(AppState::new(db.clone(), config.clone()), &config);
    (router, db)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
