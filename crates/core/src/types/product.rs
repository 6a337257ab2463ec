//! Product records and the draft payload used to create or edit them.
//!
//! Wire and file field names keep the storefront's historical camelCase
//! (`originalPrice`, `ltcAddress`); everything else is lowercase. Fields
//! added after the first catalog format (`image`, `qr`, `ltcAddress`,
//! `color`, `icon`) default when absent so older product files still load.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::ProductColor;
use super::id::ProductId;

/// Icon assigned to products created through the admin API.
pub const DEFAULT_ICON: &str = "fa-box";

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique ID, derived from the creation timestamp.
    pub id: ProductId,
    /// Display name (e.g., "Discord Nitro").
    pub name: String,
    /// Subscription duration label (e.g., "3 Months").
    pub duration: String,
    /// Current sale price.
    pub price: Decimal,
    /// Pre-discount price; at least `price`.
    #[serde(rename = "originalPrice")]
    pub original_price: Decimal,
    /// Product image URL, empty when unset.
    #[serde(default)]
    pub image: String,
    /// Payment QR code URL, empty when unset.
    #[serde(default)]
    pub qr: String,
    /// Litecoin payment address, empty when unset.
    #[serde(rename = "ltcAddress", default)]
    pub ltc_address: String,
    /// Card color tag.
    #[serde(default)]
    pub color: ProductColor,
    /// Font Awesome icon class. Stored at creation, preserved on update.
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Product {
    /// Discount percentage derived from `price` and `original_price`.
    ///
    /// Never persisted; the storefront recomputes it for display. Returns
    /// `None` when `original_price` is zero.
    #[must_use]
    pub fn discount_percent(&self) -> Option<i32> {
        if self.original_price.is_zero() {
            return None;
        }
        let ratio = (self.original_price - self.price) / self.original_price;
        (ratio * Decimal::from(100)).round().to_i32()
    }

    /// Replace every field except `id` and `icon` with the draft's values.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.duration = draft.duration;
        self.price = draft.price;
        self.original_price = draft.original_price;
        self.image = draft.image;
        self.qr = draft.qr;
        self.ltc_address = draft.ltc_address;
        self.color = draft.color;
    }
}

/// Product fields sans ID, as submitted by the admin console.
///
/// Optional fields default to their empty/purple values when omitted, so a
/// minimal `{name, duration, price, originalPrice}` body is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub duration: String,
    pub price: Decimal,
    #[serde(rename = "originalPrice")]
    pub original_price: Decimal,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub qr: String,
    #[serde(rename = "ltcAddress", default)]
    pub ltc_address: String,
    #[serde(default)]
    pub color: ProductColor,
}

/// Draft validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("price must not be negative")]
    NegativePrice,
    #[error("originalPrice must be at least price")]
    OriginalBelowPrice,
}

impl ProductDraft {
    /// Check the pricing invariants: `price >= 0` and `original_price >= price`.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` naming the violated invariant.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.price.is_sign_negative() {
            return Err(DraftError::NegativePrice);
        }
        if self.original_price < self.price {
            return Err(DraftError::OriginalBelowPrice);
        }
        Ok(())
    }

    /// Promote the draft to a full product under the given ID.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            duration: self.duration,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            qr: self.qr,
            ltc_address: self.ltc_address,
            color: self.color,
            icon: default_icon(),
        }
    }
}
