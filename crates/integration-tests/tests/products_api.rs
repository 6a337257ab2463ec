//! Product catalog CRUD over HTTP, including the auth gate.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use legacy_store_integration_tests::TestApp;

fn draft(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "duration": "1 Month",
        "price": 1.99,
        "originalPrice": 3.99
    })
}

#[tokio::test]
async fn list_returns_seeded_catalog() {
    let app = TestApp::spawn();

    let (status, body) = app.request("GET", "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[0]["name"], "Discord Nitro Basic");
    assert_eq!(products[0]["originalPrice"], 4.99);
    // The seed is persisted on first load.
    assert!(app.products_file().exists());
}

#[tokio::test]
async fn create_without_token_is_unauthorized_and_leaves_catalog_unchanged() {
    let app = TestApp::spawn();

    let (status, body) = app
        .request("POST", "/api/products", None, Some(draft("Intruder")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unauthorized");

    let (_, body) = app.request("GET", "/api/products", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn create_with_token_appends_product() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request("POST", "/api/products", Some(&token), Some(draft("New Thing")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["product"]["name"], "New Thing");
    assert_eq!(body["product"]["icon"], "fa-box");
    assert_eq!(body["product"]["color"], "purple");
    assert!(body["product"]["id"].as_i64().unwrap() > 6);

    let (_, list) = app.request("GET", "/api/products", None, None).await;
    assert_eq!(list.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn created_ids_are_unique() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let (_, body) = app
            .request("POST", "/api/products", Some(&token), Some(draft(name)))
            .await;
        ids.push(body["product"]["id"].as_i64().unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn create_rejects_original_price_below_price() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/products",
            Some(&token),
            Some(json!({
                "name": "Bad", "duration": "1 Month",
                "price": 5.0, "originalPrice": 1.0
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn malformed_body_is_bad_request_with_error_envelope() {
    let app = TestApp::spawn();
    let token = app.login().await;

    for (method, uri) in [("POST", "/api/products"), ("PUT", "/api/products/1")] {
        let (status, body) = app
            .request_with_raw_body(method, uri, Some(&token), "not json {")
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["success"], false, "{method} {uri}");
        assert!(body["error"].is_string(), "{method} {uri}");
    }

    let (_, list) = app.request("GET", "/api/products", None, None).await;
    assert_eq!(list.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request("PUT", "/api/products/3", Some(&token), Some(draft("Renamed")))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["id"], 3);
    assert_eq!(body["product"]["name"], "Renamed");
    assert_eq!(body["product"]["price"], 1.99);
}

#[tokio::test]
async fn update_missing_product_is_not_found() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request("PUT", "/api/products/999999", Some(&token), Some(draft("X")))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn delete_removes_product() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request("DELETE", "/api/products/6", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, list) = app.request("GET", "/api/products", None, None).await;
    assert_eq!(list.as_array().unwrap().len(), 5);
    assert!(!list.as_array().unwrap().iter().any(|p| p["id"] == 6));
}

#[tokio::test]
async fn delete_missing_product_is_not_found() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request("DELETE", "/api/products/999999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn mutations_reject_a_bogus_token() {
    let app = TestApp::spawn();

    let bogus = "f".repeat(64);
    for (method, uri) in [
        ("POST", "/api/products"),
        ("PUT", "/api/products/1"),
        ("DELETE", "/api/products/1"),
    ] {
        let body = (method != "DELETE").then(|| draft("X"));
        let (status, _) = app.request(method, uri, Some(&bogus), body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}
