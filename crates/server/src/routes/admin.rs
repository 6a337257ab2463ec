//! Admin session route handlers.
//!
//! Login exchanges the configured credentials for an opaque bearer token;
//! logout and verify operate on the `X-Admin-Token` header. There is no
//! rate limiting or lockout on login, matching the storefront's historical
//! behavior.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::header_token;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    success: bool,
    token: String,
}

/// Plain success acknowledgement.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    success: bool,
}

impl AckResponse {
    /// The `{"success": true}` acknowledgement.
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Verify response.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    success: bool,
    authenticated: bool,
}

/// `POST /api/admin/login`
///
/// A malformed body is treated as a credential mismatch, not a distinct
/// validation error.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Ok(Json(body)) = payload else {
        return Err(AppError::InvalidCredentials);
    };

    let admin = &state.config().admin;
    if body.username != admin.username || body.password != *admin.password.expose_secret() {
        tracing::warn!(username = %body.username, "failed admin login");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions().issue().await?;
    Ok(Json(LoginResponse {
        success: true,
        token: token.as_str().to_string(),
    }))
}

/// `POST /api/admin/logout`
///
/// Always answers `{"success": true}`, whether or not the header named a
/// live session.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<AckResponse> {
    if let Some(token) = header_token(&headers) {
        state.sessions().revoke(&token).await;
    }
    Json(AckResponse::ok())
}

/// `GET /api/admin/verify`
///
/// Reports whether the presented token names a live session; always 200.
#[instrument(skip_all)]
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> Json<VerifyResponse> {
    let authenticated = match header_token(&headers) {
        Some(token) => state.sessions().validate(&token).await,
        None => false,
    };
    Json(VerifyResponse {
        success: true,
        authenticated,
    })
}
