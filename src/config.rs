//! Application configuration loaded from environment variables.
//!
//! The configuration is read once at startup into an immutable snapshot and
//! never written back to. Mutable token state lives in
//! [`crate::services::TokenStore`], not here.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// FleetUp account identifier (`acctId` in API calls)
    pub account_id: String,
    /// Shared secret for token issuance
    pub secret_key: String,
    /// Value sent in the `x-api-key` header
    pub api_key: String,
    /// API base URL, including the trailing slash
    pub base_url: String,
    /// Collection interval in seconds
    pub collection_interval_secs: u64,
    /// Tracing filter directive (e.g. "info", "debug")
    pub log_level: String,
    /// Base directory for CSV log files
    pub data_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            account_id: "test-account".to_string(),
            secret_key: "test-secret".to_string(),
            api_key: "test-api-key".to_string(),
            base_url: "http://localhost:9090/".to_string(),
            collection_interval_secs: 300,
            log_level: "info".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `FLEETUP_*` credentials and the base URL are required; everything else
    /// has a documented default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            account_id: env::var("FLEETUP_ACCOUNT_ID")
                .map_err(|_| ConfigError::Missing("FLEETUP_ACCOUNT_ID"))?,
            secret_key: env::var("FLEETUP_SECRET_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FLEETUP_SECRET_KEY"))?,
            api_key: env::var("FLEETUP_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FLEETUP_API_KEY"))?,
            base_url: env::var("FLEETUP_BASE_URL")
                .map_err(|_| ConfigError::Missing("FLEETUP_BASE_URL"))?,
            // Unset or non-numeric values fall back to 300 seconds.
            collection_interval_secs: env::var("COLLECTION_INTERVAL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            data_dir: env::var("GPS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
