//! Admin session lifecycle over HTTP: login, verify, logout, expiry.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use legacy_store_integration_tests::{ADMIN_USERNAME, TestApp};

#[tokio::test]
async fn login_with_correct_credentials_issues_hex_token() {
    let app = TestApp::spawn();

    let token = app.login().await;
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let app = TestApp::spawn();

    let (status, body) = app
        .request(
            "POST",
            "/api/admin/login",
            None,
            Some(json!({ "username": ADMIN_USERNAME, "password": "wrong" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid credentials");
    // No session was persisted for the failed attempt.
    assert!(!app.sessions_file().exists());
}

#[tokio::test]
async fn malformed_login_body_behaves_as_credential_mismatch() {
    let app = TestApp::spawn();

    let (status, body) = app
        .request("POST", "/api/admin/login", None, Some(json!({ "user": "admin" })))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn verify_reports_session_state() {
    let app = TestApp::spawn();

    // No header at all
    let (status, body) = app.request("GET", "/api/admin/verify", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["authenticated"], false);

    // Live session
    let token = app.login().await;
    let (status, body) = app
        .request("GET", "/api/admin/verify", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);

    // Unknown token
    let (_, body) = app
        .request("GET", "/api/admin/verify", Some("0".repeat(64).as_str()), None)
        .await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn logout_revokes_the_session_and_always_succeeds() {
    let app = TestApp::spawn();
    let token = app.login().await;

    let (status, body) = app
        .request("POST", "/api/admin/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = app
        .request("GET", "/api/admin/verify", Some(&token), None)
        .await;
    assert_eq!(body["authenticated"], false);

    // Logout without any token still succeeds.
    let (status, body) = app.request("POST", "/api/admin/logout", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn expired_session_fails_verify_and_is_purged() {
    let app = TestApp::spawn();
    let token = app.login().await;

    app.expire_all_sessions();

    let (status, body) = app
        .request("GET", "/api/admin/verify", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], false);

    // Lazy expiry persisted the deletion.
    let data = std::fs::read_to_string(app.sessions_file()).unwrap();
    assert!(!data.contains(&token));
}

#[tokio::test]
async fn expired_session_cannot_mutate_products() {
    let app = TestApp::spawn();
    let token = app.login().await;
    app.expire_all_sessions();

    let (status, body) = app
        .request(
            "POST",
            "/api/products",
            Some(&token),
            Some(json!({
                "name": "X", "duration": "1 Month",
                "price": 1.0, "originalPrice": 2.0
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}
