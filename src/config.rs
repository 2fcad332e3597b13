//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default byte budget: 64 MiB
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024 * 1024;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Byte budget for keys plus values, 0 = unbounded
    pub max_bytes: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_BYTES` - Byte budget, 0 disables eviction (default: 64 MiB)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_bytes: env::var("CACHE_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BYTES),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            server_port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_bytes, 64 * 1024 * 1024);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env() {
        // Both cases share one test so they never race on the same variables
        env::remove_var("CACHE_MAX_BYTES");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.max_bytes, DEFAULT_MAX_BYTES);
        assert_eq!(config.server_port, DEFAULT_PORT);

        env::set_var("CACHE_MAX_BYTES", "0");
        env::set_var("SERVER_PORT", "not-a-port");

        let config = Config::from_env();
        assert_eq!(config.max_bytes, 0);
        assert_eq!(config.server_port, DEFAULT_PORT);

        env::remove_var("CACHE_MAX_BYTES");
        env::remove_var("SERVER_PORT");
    }
}
