//! Fingrid service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Fingrid open-data client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingridConfig {
    /// Base URL for the Fingrid open-data API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent with every request (`x-api-key` header)
    pub api_key: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.fingrid.fi/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl FingridConfig {
    /// Create a configuration with the given API key and default endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
