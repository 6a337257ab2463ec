//! Outbound service clients.

pub mod notify;
