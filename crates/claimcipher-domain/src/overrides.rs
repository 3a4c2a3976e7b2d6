//! Overrides module - values supplied explicitly by the user

use crate::field::ClaimField;
use std::collections::BTreeMap;

/// An override that was refused because it did not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    /// Field the value was meant for
    pub field: ClaimField,

    /// The raw value as supplied
    pub value: String,

    /// Why it was refused
    pub reason: String,
}

/// User-supplied values that take precedence over every other source
///
/// Empty values are treated as absent. Numeric fields (year, mileage, days to
/// repair) are validated on insertion; a value that does not parse is kept
/// out of the override set and recorded in [`Overrides::rejected`] so the
/// caller can report it.
///
/// # Examples
///
/// ```
/// use claimcipher_domain::{ClaimField, Overrides};
///
/// let mut overrides = Overrides::new();
/// overrides.set(ClaimField::Make, "Toyota");
/// overrides.set(ClaimField::Year, "twenty-ten");
/// overrides.set(ClaimField::Mileage, "45,231");
///
/// assert_eq!(overrides.get(ClaimField::Make), Some("Toyota"));
/// assert_eq!(overrides.get(ClaimField::Year), None);
/// assert_eq!(overrides.get(ClaimField::Mileage), Some("45231"));
/// assert_eq!(overrides.rejected().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: BTreeMap<ClaimField, String>,
    rejected: Vec<RejectedOverride>,
}

impl Overrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override for a field
    ///
    /// Returns `true` if the value was accepted.
    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) -> bool {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.values.remove(&field);
            return false;
        }

        match normalize(field, trimmed) {
            Ok(normalized) => {
                self.values.insert(field, normalized);
                true
            }
            Err(reason) => {
                self.values.remove(&field);
                self.rejected.push(RejectedOverride {
                    field,
                    value: raw,
                    reason,
                });
                false
            }
        }
    }

    /// Set an override if one was supplied
    pub fn set_opt(&mut self, field: ClaimField, value: Option<String>) -> bool {
        match value {
            Some(value) => self.set(field, value),
            None => false,
        }
    }

    /// Builder-style variant of [`Overrides::set`]
    pub fn with(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get the override for a field
    pub fn get(&self, field: ClaimField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Overrides refused during insertion
    pub fn rejected(&self) -> &[RejectedOverride] {
        &self.rejected
    }

    /// Number of accepted overrides
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no override was accepted
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn normalize(field: ClaimField, value: &str) -> Result<String, String> {
    match field {
        ClaimField::Year => {
            if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
                Ok(value.to_string())
            } else {
                Err(format!("'{}' is not a four-digit year", value))
            }
        }
        ClaimField::Mileage => {
            let digits: String = value.chars().filter(|c| *c != ',').collect();
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                Ok(digits)
            } else {
                Err(format!("'{}' is not a mileage", value))
            }
        }
        ClaimField::DaysToRepair => value
            .parse::<u32>()
            .map(|days| days.to_string())
            .map_err(|_| format!("'{}' is not a whole number of days", value)),
        _ => Ok(value.to_string()),
    }
}
