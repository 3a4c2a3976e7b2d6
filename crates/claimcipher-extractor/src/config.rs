//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Longest damage description the matcher will capture (characters)
pub const MAX_DAMAGE_DESCRIPTION_LIMIT: usize = 1_000;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Read at most this many pages (all pages when unset)
    pub max_pages: Option<usize>,

    /// Characters captured after a damage heading
    pub damage_description_limit: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_pages == Some(0) {
            return Err("max_pages must be greater than 0".to_string());
        }
        if self.damage_description_limit == 0 {
            return Err("damage_description_limit must be greater than 0".to_string());
        }
        if self.damage_description_limit > MAX_DAMAGE_DESCRIPTION_LIMIT {
            return Err(format!(
                "damage_description_limit cannot exceed {}",
                MAX_DAMAGE_DESCRIPTION_LIMIT
            ));
        }
        Ok(())
    }

    /// Use a page limit
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_pages: None,
            damage_description_limit: 200,
        }
    }
}
