//! Matched module - the sparse record produced by pattern matching

use crate::field::ClaimField;

/// Fields located in estimate text by the field matcher
///
/// Every key is always present; `None` means "not found in the text". The
/// matcher never stores an empty string, so downstream merging can tell a
/// missing value from one that was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedFields {
    /// 17-character VIN
    pub vin: Option<String>,

    /// Four-digit model year (1900-2099)
    pub year: Option<String>,

    /// Vehicle make
    pub make: Option<String>,

    /// Vehicle model
    pub model: Option<String>,

    /// Mileage with thousands separators removed
    pub mileage: Option<String>,

    /// Damage description (up to 200 characters)
    pub damages: Option<String>,
}

impl MatchedFields {
    /// The claim fields a matcher can populate, in record order
    pub const FIELDS: [ClaimField; 6] = [
        ClaimField::Vin,
        ClaimField::Year,
        ClaimField::Make,
        ClaimField::Model,
        ClaimField::Mileage,
        ClaimField::Damages,
    ];

    /// Get the matched value for a claim field
    ///
    /// Fields the matcher never looks for (customer name, claim number, ...)
    /// are always `None`.
    pub fn get(&self, field: ClaimField) -> Option<&str> {
        let value = match field {
            ClaimField::Vin => &self.vin,
            ClaimField::Year => &self.year,
            ClaimField::Make => &self.make,
            ClaimField::Model => &self.model,
            ClaimField::Mileage => &self.mileage,
            ClaimField::Damages => &self.damages,
            _ => return None,
        };
        value.as_deref()
    }

    /// Iterate over the six matcher keys and their values
    pub fn iter(&self) -> impl Iterator<Item = (ClaimField, Option<&str>)> + '_ {
        Self::FIELDS.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Number of fields that were found
    pub fn found_count(&self) -> usize {
        self.iter().filter(|(_, value)| value.is_some()).count()
    }

    /// Whether nothing at all was found
    pub fn is_empty(&self) -> bool {
        self.found_count() == 0
    }
}
