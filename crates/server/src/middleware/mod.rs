//! Request guards for the admin API.

pub mod auth;

pub use auth::{ADMIN_TOKEN_HEADER, RequireAdmin, header_token};
