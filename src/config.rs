//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed
//! explicitly to the components that need it. Nothing reads the environment
//! after startup.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://shortener.db`)
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:8000`)
//! - `SHORT_CODE_LENGTH` - Length of generated codes (default: 6, range: 4-32)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

const MIN_CODE_LENGTH: usize = 4;
const MAX_CODE_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Prefix for short URLs in responses, without a trailing slash.
    pub base_url: String,
    pub short_code_length: usize,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    /// In-memory databases always use a single connection.
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds.
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shortener.db".to_string());
        let base_url = env::var("BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let short_code_length = parse_var("SHORT_CODE_LENGTH", DEFAULT_CODE_LENGTH)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            database_url,
            base_url,
            short_code_length,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `short_code_length` is outside 4-32
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "BASE_URL must use http or https, got '{}'",
                self.base_url
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.short_code_length) {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.short_code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Logs the loaded configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Short code length: {}", self.short_code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://shortener.db".to_string(),
            base_url: "http://localhost:8000".to_string(),
            short_code_length: 6,
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.short_code_length = 3;
        assert!(config.validate().is_err());
        config.short_code_length = 33;
        assert!(config.validate().is_err());
        config.short_code_length = 6;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:8000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "ftp://files.example.com".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for name in [
                "DATABASE_URL",
                "BASE_URL",
                "SHORT_CODE_LENGTH",
                "LISTEN",
                "LOG_FORMAT",
                "DB_MAX_CONNECTIONS",
                "DB_CONNECT_TIMEOUT",
            ] {
                env::remove_var(name);
            }
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://shortener.db");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.short_code_length, 6);
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.log_format, "text");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_base_url_trailing_slash_trimmed() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BASE_URL", "https://s.example.com/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://s.example.com");

        unsafe {
            env::remove_var("BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_rejected() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SHORT_CODE_LENGTH", "six");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SHORT_CODE_LENGTH"));

        unsafe {
            env::remove_var("SHORT_CODE_LENGTH");
        }
    }
}
