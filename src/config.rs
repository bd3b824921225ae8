use std::env;
use std::path::PathBuf;

use crate::hive::HiveId;

#[derive(Debug, Clone)]
pub struct Config {
    // Hive endpoints
    pub hive1_endpoint_url: String,
    pub hive2_endpoint_url: String,

    // Polling
    pub poll_interval_seconds: u64,
    pub request_timeout_seconds: u64,

    // UI preference persistence
    pub prefs_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            // Hive endpoints
            hive1_endpoint_url: env::var("HIVE1_ENDPOINT_URL")
                .map_err(|_| ConfigError::Missing("HIVE1_ENDPOINT_URL"))?,
            hive2_endpoint_url: env::var("HIVE2_ENDPOINT_URL")
                .map_err(|_| ConfigError::Missing("HIVE2_ENDPOINT_URL"))?,

            // Polling
            poll_interval_seconds: env::var("POLL_INTERVAL_SECONDS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            // UI preference persistence
            prefs_path: env::var("PREFS_PATH")
                .unwrap_or_else(|_| "hivemon-prefs.json".to_string())
                .into(),
        })
    }

    /// The endpoint URL configured for a hive.
    #[must_use]
    pub fn endpoint(&self, hive: HiveId) -> &str {
        match hive {
            HiveId::Hive1 => &self.hive1_endpoint_url,
            HiveId::Hive2 => &self.hive2_endpoint_url,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
