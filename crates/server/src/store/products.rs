//! Durable product catalog with whole-file JSON persistence.
//!
//! Every mutation reloads the full collection from disk before modifying
//! and writing back, so there is no drift between memory and disk. The
//! store's write mutex makes each read-modify-write atomic with respect to
//! other mutators in the process.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use legacy_store_core::product::DEFAULT_ICON;
use legacy_store_core::{Product, ProductColor, ProductDraft, ProductId};

use super::StoreError;

/// File-backed product store.
pub struct ProductStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ProductStore {
    /// Create a store backed by the given snapshot file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the persisted collection.
    ///
    /// A missing file is seeded with the default catalog and persisted; a
    /// corrupt or unreadable file falls back to the defaults in memory
    /// without touching disk. Load never fails the request.
    pub async fn load(&self) -> Vec<Product> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(products) => products,
                Err(err) => {
                    tracing::warn!(error = %err, path = %self.path.display(), "corrupt products file, using default catalog");
                    default_catalog()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let products = default_catalog();
                if let Err(err) = self.save(&products).await {
                    tracing::warn!(error = %err, "failed to seed products file");
                }
                products
            }
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "failed to read products file, using default catalog");
                default_catalog()
            }
        }
    }

    /// Serialize the full collection, overwriting prior content.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the write fails; the caller maps it to a
    /// 500 response rather than crashing.
    pub async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(products)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }

    /// Append a new product built from `draft` and persist the collection.
    ///
    /// The ID is taken from the epoch-millisecond clock and bumped past any
    /// collision, so it is unique within the store even for two creates in
    /// the same millisecond.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if persisting fails.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut products = self.load().await;
        let id = fresh_id(&products, Utc::now());
        let product = draft.into_product(id);
        products.push(product.clone());
        self.save(&products).await?;

        tracing::info!(
            %id,
            name = %product.name,
            color = %product.color,
            discount = product.discount_percent(),
            "product created"
        );
        Ok(product)
    }

    /// Replace all fields except `id` and `icon` of the product with the
    /// given ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has the ID; the file is
    /// not rewritten in that case. Returns `StoreError::Io` if persisting
    /// fails.
    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut products = self.load().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        product.apply(draft);
        let updated = product.clone();
        self.save(&products).await?;

        tracing::info!(%id, "product updated");
        Ok(updated)
    }

    /// Remove the product with the given ID and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has the ID, leaving the
    /// file untouched. Returns `StoreError::Io` if persisting fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut products = self.load().await;
        let initial_len = products.len();
        products.retain(|p| p.id != id);
        if products.len() == initial_len {
            return Err(StoreError::NotFound(id));
        }
        self.save(&products).await?;

        tracing::info!(%id, "product deleted");
        Ok(())
    }
}

/// Pick an ID unique within `products`, starting from the current
/// epoch-millisecond timestamp.
fn fresh_id(products: &[Product], now: DateTime<Utc>) -> ProductId {
    let mut id = now.timestamp_millis();
    while products.iter().any(|p| p.id.as_i64() == id) {
        id += 1;
    }
    ProductId::new(id)
}

/// The six seed products written on first load.
fn default_catalog() -> Vec<Product> {
    fn seed(id: i64, name: &str, duration: &str, price_cents: i64, original_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            duration: duration.to_string(),
            price: Decimal::new(price_cents, 2),
            original_price: Decimal::new(original_cents, 2),
            image: String::new(),
            qr: String::new(),
            ltc_address: String::new(),
            color: ProductColor::default(),
            icon: DEFAULT_ICON.to_string(),
        }
    }

    vec![
        seed(1, "Discord Nitro Basic", "1 Month", 299, 499),
        seed(2, "Discord Nitro Basic", "3 Months", 799, 1499),
        seed(3, "Discord Nitro", "1 Month", 499, 999),
        seed(4, "Discord Nitro", "3 Months", 1299, 2999),
        seed(5, "Discord Nitro", "1 Year", 3999, 9999),
        seed(6, "Server Boost", "1 Month", 399, 499),
    ]
}
