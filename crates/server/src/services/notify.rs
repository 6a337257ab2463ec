//! Discord webhook client for order notifications.
//!
//! Checkout posts an embed describing the order to the configured webhook.
//! Delivery is best-effort: the checkout response never waits on it and
//! failures only reach the log.

use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use legacy_store_core::Order;

/// Embed accent color (storefront purple).
const EMBED_COLOR: u32 = 0x007c_3aed;

/// Errors that can occur when delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Webhook returned an error response.
    #[error("webhook error: status {status}")]
    Api { status: u16 },
}

/// Discord webhook client.
#[derive(Clone)]
pub struct OrderNotifier {
    client: Client,
    webhook_url: String,
}

impl OrderNotifier {
    /// Create a notifier posting to the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }

    /// Post the order embed to the webhook.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the request fails or the webhook rejects
    /// the payload. Callers treat this as log-only.
    pub async fn send(&self, order: &Order) -> Result<(), NotifyError> {
        let payload = embed_payload(order);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Api {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Build the Discord embed body for an order.
fn embed_payload(order: &Order) -> serde_json::Value {
    json!({
        "embeds": [{
            "title": "New Order Received",
            "color": EMBED_COLOR,
            "fields": [
                { "name": "Order ID", "value": order.order_id.clone(), "inline": true },
                { "name": "Total", "value": format!("₹{}", order.total), "inline": true },
                { "name": "Payment Method", "value": order.payment_method.to_uppercase(), "inline": true },
                { "name": "Discord", "value": order.discord.clone(), "inline": true },
                { "name": "Telegram", "value": order.telegram.as_deref().unwrap_or("N/A"), "inline": true },
                { "name": "Instagram", "value": order.instagram.as_deref().unwrap_or("N/A"), "inline": true },
                { "name": "Items", "value": order.items.clone() },
                { "name": "Message", "value": order.message.as_deref().unwrap_or("No message") }
            ],
            "timestamp": Utc::now().to_rfc3339()
        }]
    })
}
