//! Weather service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the MET Norway locationforecast client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetNoConfig {
    /// Base URL for the locationforecast API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifying user agent, required by the MET Norway terms of service
    /// (<https://api.met.no/doc/TermsOfService>)
    pub user_agent: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl MetNoConfig {
    /// Create a configuration with the given user agent and default endpoint
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: user_agent.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: "integration-tests/0.1".to_string(),
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

        if self.user_agent.is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
