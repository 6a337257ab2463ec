//! Legacy Store Core - Shared types library.
//!
//! This crate provides common types used across Legacy Store components:
//! - `server` - The storefront and admin HTTP API
//! - `integration-tests` - HTTP-level test harness
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, sessions, orders, and their newtype IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
