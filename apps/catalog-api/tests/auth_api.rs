mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, post_json, test_app};

#[tokio::test]
async fn test_token_auth_issues_both_tokens() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/auth/token-auth",
            json!({ "id": 7, "email": "buyer@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("refreshToken="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_token_auth_rejects_non_object() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json("/api/auth/token-auth", json!("just a string")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Issues a token pair and returns the parsed refresh cookie.
async fn issue_refresh_cookie(app: &Router) -> Cookie<'static> {
    let response = app
        .clone()
        .oneshot(post_json("/api/auth/token-auth", json!({ "id": 7 })))
        .await
        .unwrap();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    Cookie::parse(set_cookie).unwrap()
}

fn refresh_request(cookie_header: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/auth/refresh")
        .header(header::COOKIE, cookie_header)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_refresh_cookie_round_trip() {
    let (app, _db) = test_app().await;

    let cookie = issue_refresh_cookie(&app).await;
    assert_eq!(cookie.name(), "refreshToken");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));

    let response = app
        .oneshot(refresh_request(cookie.stripped().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["accessToken"].as_str().is_some());
}

#[tokio::test]
async fn test_refresh_accepts_quoted_cookie_value() {
    let (app, _db) = test_app().await;

    let cookie = issue_refresh_cookie(&app).await;
    let header = format!("theme=dark; refreshToken=\"{}\"", cookie.value());

    let response = app.oneshot(refresh_request(header)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_cookie_is_unauthorized() {
    let (app, _db) = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/refresh")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/auth/token-auth", json!({ "id": 7 })))
        .await
        .unwrap();
    let access = body_json(response).await["accessToken"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(refresh_request(format!("refreshToken={}", access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
