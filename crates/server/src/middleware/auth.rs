//! Admin authentication guard.
//!
//! Provides an extractor for requiring a live admin session on mutating
//! product routes. The guard owns no data; it only consults the session
//! store and short-circuits with 401 before any business logic runs.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

use legacy_store_core::SessionToken;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the opaque admin bearer token.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Extractor that requires a valid, unexpired admin session.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     _admin: RequireAdmin,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // only reached with a live session
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = header_token(&parts.headers).ok_or(AppError::Unauthorized)?;
        if state.sessions().validate(&token).await {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

/// Read the `X-Admin-Token` header, if present and well-formed.
#[must_use]
pub fn header_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(SessionToken::from)
}
