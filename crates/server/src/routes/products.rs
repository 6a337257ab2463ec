//! Product catalog route handlers.
//!
//! Listing is public; every mutating route is behind the [`RequireAdmin`]
//! guard, which rejects before the body is even parsed.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Serialize;
use tracing::instrument;

use legacy_store_core::{Product, ProductDraft, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::admin::AckResponse;
use crate::state::AppState;

/// Response carrying a created or updated product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    success: bool,
    product: Product,
}

/// `GET /api/products`
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products().load().await)
}

/// `POST /api/products`
#[instrument(skip_all)]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<Json<ProductResponse>> {
    let draft = parse_draft(payload)?;
    let product = state.products().create(draft).await?;
    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// `PUT /api/products/{id}`
#[instrument(skip_all)]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<Json<ProductResponse>> {
    let draft = parse_draft(payload)?;
    let product = state.products().update(ProductId::new(id), draft).await?;
    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Unpack and validate a draft body, mapping both an unparseable body and
/// a failed pricing check to a 400 with the usual error envelope.
fn parse_draft(
    payload: std::result::Result<Json<ProductDraft>, JsonRejection>,
) -> Result<ProductDraft> {
    let Json(draft) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    draft
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(draft)
}

/// `DELETE /api/products/{id}`
#[instrument(skip_all)]
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AckResponse>> {
    state.products().delete(ProductId::new(id)).await?;
    Ok(Json(AckResponse::ok()))
}
