//! Client configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use wqi_core::{Error, Result};

/// Used when `WQI_BASE_URL` is not set, matching the service's dev default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the HTTP quality service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("WQI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = env::var("WQI_API_KEY").ok().filter(|key| !key.is_empty());

        let timeout_secs = match env::var("WQI_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Configuration(format!(
                    "WQI_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: normalize_base_url(base_url),
            api_key,
            timeout_secs,
        })
    }

    /// Create configuration with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Attach an API key, sent as the `x-api-key` header
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
