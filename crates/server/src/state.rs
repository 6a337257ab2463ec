//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::notify::OrderNotifier;
use crate::store::{ProductStore, SessionStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The two stores are owned
/// here and injected into handlers explicitly; the server keeps no other
/// session or catalog state in memory.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    products: ProductStore,
    sessions: SessionStore,
    notifier: Option<OrderNotifier>,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// The order notifier is only constructed when a webhook URL is
    /// configured; otherwise checkout notifications are silently disabled.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let products = ProductStore::new(config.products_path());
        let sessions = SessionStore::new(config.sessions_path());
        let notifier = config
            .webhook_url
            .as_ref()
            .map(|url| OrderNotifier::new(url.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                sessions,
                notifier,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get the order notifier, if a webhook URL is configured.
    #[must_use]
    pub fn notifier(&self) -> Option<&OrderNotifier> {
        self.inner.notifier.as_ref()
    }
}
