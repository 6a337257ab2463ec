//! Integration test harness for Legacy Store.
//!
//! Drives the full router in-process via `tower::ServiceExt::oneshot`
//! against a tempdir-backed state, so every test gets an isolated pair of
//! snapshot files and no listening socket.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use legacy_store_server::config::{AdminCredentials, ServerConfig};
use legacy_store_server::state::AppState;

/// Test admin username.
pub const ADMIN_USERNAME: &str = "admin";

/// Test admin password.
pub const ADMIN_PASSWORD: &str = "legacy2024";

/// An in-process server instance over a fresh temp data directory.
pub struct TestApp {
    router: Router,
    data_dir: TempDir,
}

impl TestApp {
    /// Build a server with test credentials and no webhook configured.
    #[must_use]
    pub fn spawn() -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            data_dir: data_dir.path().to_path_buf(),
            public_dir: data_dir.path().join("public"),
            admin: AdminCredentials {
                username: ADMIN_USERNAME.to_string(),
                password: SecretString::from(ADMIN_PASSWORD),
            },
            webhook_url: None,
        };
        let router = legacy_store_server::app(AppState::new(config));
        Self { router, data_dir }
    }

    /// Path of the on-disk session snapshot.
    #[must_use]
    pub fn sessions_file(&self) -> std::path::PathBuf {
        self.data_dir.path().join(".sessions.json")
    }

    /// Path of the on-disk product snapshot.
    #[must_use]
    pub fn products_file(&self) -> std::path::PathBuf {
        self.data_dir.path().join("products.json")
    }

    /// Send one request and return the raw response, headers included.
    pub async fn raw_request(&self, method: &str, uri: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send one request; returns the status and parsed JSON body
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("X-Admin-Token", token);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// Send a request whose body is an arbitrary string declared as JSON;
    /// returns the status and parsed JSON body like [`TestApp::request`].
    pub async fn request_with_raw_body(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header("X-Admin-Token", token);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// Log in with the test credentials and return the issued token.
    pub async fn login(&self) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/admin/login",
                None,
                Some(serde_json::json!({
                    "username": ADMIN_USERNAME,
                    "password": ADMIN_PASSWORD,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    /// Rewrite every persisted session so it expired in the past.
    ///
    /// Simulates the passage of 24h+ without a clock abstraction: the store
    /// re-reads the file on the next lookup and sees the stale expiry.
    pub fn expire_all_sessions(&self) {
        let path = self.sessions_file();
        let data = std::fs::read_to_string(&path).unwrap();
        let mut map: Value = serde_json::from_str(&data).unwrap();
        let past = chrono::Utc::now().timestamp_millis() - 1_000;
        for session in map.as_object_mut().unwrap().values_mut() {
            session["expires"] = Value::from(past);
        }
        std::fs::write(&path, map.to_string()).unwrap();
    }
}
