//! Legacy Store server - storefront API and admin console.
//!
//! This binary serves the JSON API and the static frontend on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Whole-file JSON snapshots for the product catalog and admin sessions
//! - Token-based admin authentication via the `X-Admin-Token` header
//! - Optional Discord webhook for order notifications
//!
//! The server holds no durable state in memory: every request re-reads the
//! backing files, so a restart loses nothing.

#![cfg_attr(not(test), forbid(unsafe_code))]

use legacy_store_server::{app, config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "legacy_store_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");
    if config.webhook_url.is_none() {
        tracing::info!("DISCORD_WEBHOOK_URL not set, order notifications disabled");
    }

    // Build application state; the stores seed their files lazily on first use
    let state = AppState::new(config.clone());
    let router = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("legacy store server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
