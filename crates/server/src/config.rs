//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LEGACY_STORE_ADMIN_USERNAME` - Admin console username
//! - `LEGACY_STORE_ADMIN_PASSWORD` - Admin console password
//!
//! ## Optional
//! - `LEGACY_STORE_HOST` - Bind address (default: 0.0.0.0)
//! - `LEGACY_STORE_PORT` - Listen port (default: 5000)
//! - `LEGACY_STORE_DATA_DIR` - Directory holding the products and sessions
//!   files (default: current directory)
//! - `LEGACY_STORE_PUBLIC_DIR` - Static frontend directory (default: public)
//! - `DISCORD_WEBHOOK_URL` - Order notification webhook; absence disables
//!   notifications

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// On-disk product catalog snapshot, relative to the data directory.
const PRODUCTS_FILE: &str = "products.json";

/// On-disk session token snapshot, relative to the data directory.
const SESSIONS_FILE: &str = ".sessions.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the two persisted snapshot files
    pub data_dir: PathBuf,
    /// Static frontend directory served at the root path
    pub public_dir: PathBuf,
    /// Admin console credentials
    pub admin: AdminCredentials,
    /// Discord webhook URL for order notifications
    pub webhook_url: Option<String>,
}

/// Admin console credentials.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Admin username
    pub username: String,
    /// Admin password (never logged)
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LEGACY_STORE_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LEGACY_STORE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LEGACY_STORE_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LEGACY_STORE_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("LEGACY_STORE_DATA_DIR", "."));
        let public_dir = PathBuf::from(get_env_or_default("LEGACY_STORE_PUBLIC_DIR", "public"));
        let admin = AdminCredentials::from_env()?;
        let webhook_url = get_optional_env("DISCORD_WEBHOOK_URL");

        Ok(Self {
            host,
            port,
            data_dir,
            public_dir,
            admin,
            webhook_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the product catalog snapshot.
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    /// Path of the session token snapshot.
    #[must_use]
    pub fn sessions_path(&self) -> PathBuf {
        self.data_dir.join(SESSIONS_FILE)
    }
}

impl AdminCredentials {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: get_required_env("LEGACY_STORE_ADMIN_USERNAME")?,
            password: SecretString::from(get_required_env("LEGACY_STORE_ADMIN_PASSWORD")?),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required, non-empty environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(key.to_string())),
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
