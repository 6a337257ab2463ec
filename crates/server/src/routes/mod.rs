//! HTTP route handlers for the JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog (public)
//! GET    /api/products         - Product listing
//!
//! # Catalog (admin, X-Admin-Token required)
//! POST   /api/products         - Create product
//! PUT    /api/products/{id}    - Update product
//! DELETE /api/products/{id}    - Delete product
//!
//! # Admin session
//! POST /api/admin/login        - Exchange credentials for a token
//! POST /api/admin/logout       - Revoke the token (always 200)
//! GET  /api/admin/verify       - Report whether the token is live
//!
//! # Checkout
//! POST /api/checkout           - Record checkout intent, notify webhook
//! ```
//!
//! Everything outside `/api` falls through to the static frontend.

pub mod admin;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin session routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/verify", get(admin::verify))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            axum::routing::put(products::update).delete(products::delete),
        )
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/admin", admin_routes())
        .nest("/api/products", product_routes())
        .route("/api/checkout", post(checkout::checkout))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the data files.
async fn health() -> &'static str {
    "ok"
}
