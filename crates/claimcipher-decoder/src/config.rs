//! Configuration for VIN decoding

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default vPIC API base URL
pub const DEFAULT_ENDPOINT: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";

/// Default timeout for decode requests (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of attempts per decode
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configuration for the VIN decoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Whether to call the decoder at all
    pub enabled: bool,

    /// API base URL
    pub endpoint: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Attempts before giving up
    pub max_retries: u32,
}

impl DecoderConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(format!("endpoint '{}' is not an http(s) URL", self.endpoint));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}
