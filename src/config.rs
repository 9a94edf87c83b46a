//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_BODY_BYTES, DEFAULT_SWEEP_INTERVAL, DEFAULT_TTL};
use crate::error::ConfigError;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in milliseconds for cached responses
    pub default_ttl_ms: u64,
    /// Interval in milliseconds between cache sweeps
    pub sweep_interval_ms: u64,
    /// Largest response body, in bytes, that will be cached
    pub max_body_bytes: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_DEFAULT_TTL_MS` - Response TTL in ms (default: 60000)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep frequency in ms (default: 300000)
    /// - `CACHE_MAX_BODY_BYTES` - Largest cacheable body (default: 1048576)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            default_ttl_ms: env_or("CACHE_DEFAULT_TTL_MS", defaults.default_ttl_ms),
            sweep_interval_ms: env_or("CACHE_SWEEP_INTERVAL_MS", defaults.sweep_interval_ms),
            max_body_bytes: env_or("CACHE_MAX_BODY_BYTES", defaults.max_body_bytes),
        }
    }

    /// Rejects settings the cache cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_ttl_ms == 0 {
            return Err(ConfigError::Invalid("CACHE_DEFAULT_TTL_MS", "must be greater than zero"));
        }
        if self.sweep_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "CACHE_SWEEP_INTERVAL_MS",
                "must be greater than zero",
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid("CACHE_MAX_BODY_BYTES", "must be greater than zero"));
        }
        Ok(())
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            default_ttl_ms: DEFAULT_TTL.as_millis() as u64,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL.as_millis() as u64,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.sweep_interval_ms, 300_000);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_DEFAULT_TTL_MS");
        env::remove_var("CACHE_MAX_BODY_BYTES");
        env::set_var("CACHE_SWEEP_INTERVAL_MS", "1234");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.default_ttl_ms, 60_000);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.sweep_interval(), Duration::from_millis(1234));

        env::set_var("CACHE_SWEEP_INTERVAL_MS", "not-a-number");
        assert_eq!(Config::from_env().sweep_interval_ms, 300_000);

        env::remove_var("CACHE_SWEEP_INTERVAL_MS");
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let zero_ttl = Config {
            default_ttl_ms: 0,
            ..Config::default()
        };
        assert!(matches!(
            zero_ttl.validate(),
            Err(ConfigError::Invalid("CACHE_DEFAULT_TTL_MS", _))
        ));

        let zero_interval = Config {
            sweep_interval_ms: 0,
            ..Config::default()
        };
        assert!(zero_interval.validate().is_err());

        let zero_body = Config {
            max_body_bytes: 0,
            ..Config::default()
        };
        assert!(zero_body.validate().is_err());
    }

    #[test]
    fn test_duration_accessors() {
        let config = Config::default();
        assert_eq!(config.default_ttl(), Duration::from_secs(60));
        assert_eq!(config.sweep_interval(), Duration::from_secs(300));
    }
}
