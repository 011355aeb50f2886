//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults suit local development:
//! - `STOCKROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `STOCKROOM_PORT` - Listen port (default: 8080)
//! - `STOCKROOM_DEMO_IDENTIFIER` - Accepted login identifier (default: admin)
//! - `STOCKROOM_DEMO_SECRET` - Accepted login secret (default: stock1room)
//! - `STOCKROOM_SEED` - Seed the demo inventory on boot (default: true)

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
///
/// Implements `Debug` manually to redact the demo secret.
#[derive(Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// The single accepted login identifier (demo credential)
    pub demo_identifier: String,
    /// The single accepted login secret (demo credential)
    pub demo_secret: SecretString,
    /// Whether to seed the demo inventory on boot
    pub seed: bool,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("demo_identifier", &self.demo_identifier)
            .field("demo_secret", &"[REDACTED]")
            .field("seed", &self.seed)
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
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOCKROOM_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOCKROOM_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_PORT".to_string(), e.to_string()))?;
        let demo_identifier = get_env_or_default("STOCKROOM_DEMO_IDENTIFIER", "admin");
        let demo_secret = SecretString::from(get_env_or_default("STOCKROOM_DEMO_SECRET", "stock1room"));
        let seed = get_env_or_default("STOCKROOM_SEED", "true")
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOCKROOM_SEED".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            port,
            demo_identifier,
            demo_secret,
            seed,
        })
    }

    /// Configuration for tests: ephemeral port, fixed demo credential,
    /// seeded inventory.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".parse().unwrap_or(IpAddr::from([127, 0, 0, 1])),
            port: 0,
            demo_identifier: "admin".to_string(),
            demo_secret: SecretString::from("stock1room"),
            seed: true,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether a validated credential matches the configured demo
    /// credential. Plaintext comparison - this is a demo login, not an
    /// authentication protocol.
    #[must_use]
    pub fn accepts(&self, identifier: &str, secret: &str) -> bool {
        identifier == self.demo_identifier && secret == self.demo_secret.expose_secret()
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::for_tests();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 0);
    }

    #[test]
    fn test_accepts_demo_credential() {
        let config = ServerConfig::for_tests();
        assert!(config.accepts("admin", "stock1room"));
        assert!(!config.accepts("admin", "wrong1pass"));
        assert!(!config.accepts("alice", "stock1room"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ServerConfig::for_tests();
        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("stock1room"));
    }
}
