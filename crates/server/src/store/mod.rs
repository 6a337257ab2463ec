//! File-backed stores for the two persisted collections.
//!
//! # Snapshot persistence
//!
//! Both stores follow the same discipline: the entire collection lives in
//! one human-readable JSON document, re-read from disk at the start of
//! every operation and rewritten in full after every mutation. There is no
//! in-memory cache between requests; disk is the only source of truth.
//!
//! A per-store async mutex serializes mutations, so two concurrent writers
//! within the process cannot overwrite each other's snapshot (the classic
//! lost-update of full-snapshot persistence). Readers go straight to disk.
//!
//! ## Files
//!
//! - `products.json` - product catalog, seeded with the default six on
//!   first load
//! - `.sessions.json` - admin token -> session map

pub mod products;
pub mod sessions;

pub use products::ProductStore;
pub use sessions::SessionStore;

use legacy_store_core::ProductId;
use thiserror::Error;

/// Errors surfaced by the file-backed stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Target product does not exist.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be serialized.
    #[error("snapshot encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}
