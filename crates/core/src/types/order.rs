//! Checkout order payload.
//!
//! Orders are transient: the server logs them and forwards a notification,
//! but never persists them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A checkout order as submitted by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Client-generated order reference.
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Buyer's Discord handle, required for delivery.
    pub discord: String,
    /// Optional Telegram handle.
    #[serde(default)]
    pub telegram: Option<String>,
    /// Optional Instagram handle.
    #[serde(default)]
    pub instagram: Option<String>,
    /// Optional free-form note from the buyer.
    #[serde(default)]
    pub message: Option<String>,
    /// Payment method label (e.g., "upi", "ltc").
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
    /// Human-readable summary of the purchased items.
    pub items: String,
    /// Order total.
    pub total: Decimal,
}
