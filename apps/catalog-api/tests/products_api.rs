mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get, post_json, test_app};

#[tokio::test]
async fn test_create_and_get_product() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/products/create",
            json!({
                "name": "Solitaire Ring",
                "description": "Single stone",
                "baseWeight": 5.5,
                "makingCharges": 1500,
                "isBISHallmarked": true,
                "isGIACertified": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Solitaire Ring");
    assert_eq!(body["data"]["isBISHallmarked"], true);
    assert_eq!(body["data"]["isAvailable"], true);

    let id = body["data"]["id"].as_i64().unwrap();
    let response = app
        .oneshot(get(&format!("/api/products/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["baseWeight"], 5.5);
}

#[tokio::test]
async fn test_list_products() {
    let (app, _db) = test_app().await;

    for name in ["Nose Pin", "Kada Bangle"] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/products/create",
                json!({ "name": name, "baseWeight": 2.0, "makingCharges": 500 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/products/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_product_id_is_400() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/products/ring")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_product_validation() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/products/create",
            json!({ "baseWeight": 5.0, "makingCharges": 100 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "name is required");

    let response = app
        .oneshot(post_json(
            "/api/products/create",
            json!({ "name": "Ring", "baseWeight": -1.0, "makingCharges": 100 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let (app, _db) = test_app().await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/products/create")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
