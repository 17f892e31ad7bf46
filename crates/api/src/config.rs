//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Agenda API
//! server. It retrieves configuration values from environment variables and
//! provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DB_HOST`: PostgreSQL host (default: "localhost")
//! - `DB_PORT`: PostgreSQL port (default: 5432)
//! - `DB_NAME`: PostgreSQL database name (required)
//! - `DB_USER`: PostgreSQL user (required)
//! - `DB_PASS`: PostgreSQL password (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the Agenda API server
///
/// This struct encapsulates all configuration options for the API server,
/// including networking and database connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL host
    pub db_host: String,

    /// PostgreSQL port
    pub db_port: u16,

    /// PostgreSQL database name
    pub db_name: String,

    /// PostgreSQL user
    pub db_user: String,

    /// PostgreSQL password
    pub db_pass: String,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// Values are read once at startup. The database name and credentials
    /// are required; their absence is a startup error rather than an empty
    /// string passed to the connection layer.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `DB_NAME`, `DB_USER` or `DB_PASS` is not set
    /// - The `API_PORT` or `DB_PORT` value cannot be parsed as a u16
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .wrap_err("Invalid DB_PORT value")?;
        let db_name =
            env::var("DB_NAME").wrap_err("DB_NAME environment variable must be set")?;
        let db_user =
            env::var("DB_USER").wrap_err("DB_USER environment variable must be set")?;
        let db_pass =
            env::var("DB_PASS").wrap_err("DB_PASS environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            db_host,
            db_port,
            db_name,
            db_user,
            db_pass,
            log_level,
            request_timeout,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the PostgreSQL connection URL composed from the DB_* settings
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_pass, self.db_host, self.db_port, self.db_name
        )
    }
}
