//! Pattern rules that pull vehicle fields out of estimate text
//!
//! Each rule runs independently over the whole text and the leftmost match
//! wins. Nothing is guessed: a rule that does not match leaves its field
//! `None`. False positives (a stray 17-character part number read as a VIN,
//! a date read as the model year) are a known limitation of the heuristic.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use claimcipher_domain::MatchedFields;
use regex::Regex;
use tracing::debug;

// VINs are printed upper-case; I, O and Q are never used.
const VIN_PATTERN: &str = r"\b([A-HJ-NPR-Z0-9]{17})\b";
const YEAR_PATTERN: &str = r"\b((?:19|20)[0-9]{2})\b";
const MAKE_PATTERN: &str = r"(?i)Make\s*[:\-]?\s*([A-Z]+)";
const MODEL_PATTERN: &str = r"(?i)Model\s*[:\-]?\s*([A-Z0-9\- ]+)";
const MILEAGE_PATTERN: &str = r"(?i)(?:Miles|Mileage)\s*[:\-]?\s*([0-9,]+)";

/// Compiled field rules
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    vin: Regex,
    year: Regex,
    make: Regex,
    model: Regex,
    mileage: Regex,
    damages: Regex,
}

impl FieldMatcher {
    /// Compile the rules with the default configuration
    pub fn new() -> Result<Self, ExtractorError> {
        Self::with_config(&ExtractorConfig::default())
    }

    /// Compile the rules for a configuration
    pub fn with_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        // "Damage Description" is tried first so the heading itself is not
        // captured as part of the description.
        let damages = format!(
            r"(?is)(?:Damage\s+Description|Damages?)\s*[:\-]?\s*(.{{0,{}}})",
            config.damage_description_limit
        );

        Ok(Self {
            vin: Regex::new(VIN_PATTERN)?,
            year: Regex::new(YEAR_PATTERN)?,
            make: Regex::new(MAKE_PATTERN)?,
            model: Regex::new(MODEL_PATTERN)?,
            mileage: Regex::new(MILEAGE_PATTERN)?,
            damages: Regex::new(&damages)?,
        })
    }

    /// Locate every field in `text`
    pub fn match_text(&self, text: &str) -> MatchedFields {
        let fields = MatchedFields {
            vin: capture(&self.vin, text).map(str::to_string),
            year: capture(&self.year, text).map(str::to_string),
            make: capture(&self.make, text).map(str::to_string),
            model: capture(&self.model, text).and_then(non_blank),
            mileage: capture(&self.mileage, text).and_then(strip_separators),
            damages: capture(&self.damages, text).and_then(non_blank),
        };

        debug!("Matched {} of 6 fields", fields.found_count());
        fields
    }
}

/// First capture group of the leftmost match
fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn strip_separators(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}
