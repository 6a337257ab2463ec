//! Core types for Legacy Store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod id;
pub mod order;
pub mod product;
pub mod session;

pub use color::ProductColor;
pub use id::ProductId;
pub use order::Order;
pub use product::{DraftError, Product, ProductDraft};
pub use session::{Session, SessionToken};
