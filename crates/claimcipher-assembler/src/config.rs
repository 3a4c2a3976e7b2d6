//! Configuration for the reference valuation

use serde::{Deserialize, Serialize};

/// Default reference value of a new vehicle
pub const DEFAULT_BASE_VALUE: f64 = 30_000.0;

/// Default fraction of value kept each year
pub const DEFAULT_RETENTION_RATE: f64 = 0.93;

/// Parameters of the depreciation curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Value at age zero
    pub base_value: f64,

    /// Multiplier applied once per year of age (0.0-1.0)
    pub retention_rate: f64,
}

impl ValuationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_value.is_finite() || self.base_value < 0.0 {
            return Err(format!(
                "base_value must be a non-negative number, got {}",
                self.base_value
            ));
        }
        if !(0.0..=1.0).contains(&self.retention_rate) {
            return Err(format!(
                "retention_rate must be between 0.0 and 1.0, got {}",
                self.retention_rate
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            base_value: DEFAULT_BASE_VALUE,
            retention_rate: DEFAULT_RETENTION_RATE,
        }
    }
}
