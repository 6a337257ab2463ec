//! Checkout route handler.
//!
//! Checkout only records intent: the order is logged, a webhook
//! notification is fired if configured, and the client gets its order ID
//! back. Nothing is persisted server-side.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use legacy_store_core::Order;

use crate::state::AppState;

/// Checkout acknowledgement.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    success: bool,
    #[serde(rename = "orderId")]
    order_id: String,
}

/// `POST /api/checkout`
///
/// The webhook delivery is fire-and-forget: it runs on a spawned task and
/// a failure is logged, never surfaced to the buyer.
#[instrument(skip_all, fields(order_id = %order.order_id))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Json<CheckoutResponse> {
    tracing::info!(
        payment_method = %order.payment_method,
        total = %order.total,
        "new order received"
    );

    let order_id = order.order_id.clone();
    if let Some(notifier) = state.notifier() {
        let notifier = notifier.clone();
        tokio::spawn(async move {
            if let Err(err) = notifier.send(&order).await {
                tracing::warn!(error = %err, "order webhook delivery failed");
            }
        });
    }

    Json(CheckoutResponse {
        success: true,
        order_id,
    })
}
