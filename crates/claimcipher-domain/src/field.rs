//! Field module - the canonical claim and vehicle keys

use std::fmt;

/// A key of the canonical claim record
///
/// The wire names returned by [`ClaimField::as_str`] are the names used when
/// serializing the record and when matching form template fields, so they
/// must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClaimField {
    /// Policy holder / customer name
    CustomerName,

    /// Adjuster handling the claim
    AdjusterName,

    /// Carrier claim number
    ClaimNumber,

    /// Date the loss occurred
    DateOfLoss,

    /// Where the vehicle was inspected
    InspectionLocation,

    /// 17-character vehicle identification number
    Vin,

    /// Vehicle model year
    Year,

    /// Vehicle make
    Make,

    /// Vehicle model
    Model,

    /// Odometer reading, digits only
    Mileage,

    /// Free-text damage description
    Damages,

    /// Estimated days to repair
    DaysToRepair,
}

impl ClaimField {
    /// Every field, in record order
    pub const ALL: [ClaimField; 12] = [
        ClaimField::CustomerName,
        ClaimField::AdjusterName,
        ClaimField::ClaimNumber,
        ClaimField::DateOfLoss,
        ClaimField::InspectionLocation,
        ClaimField::Vin,
        ClaimField::Year,
        ClaimField::Make,
        ClaimField::Model,
        ClaimField::Mileage,
        ClaimField::Damages,
        ClaimField::DaysToRepair,
    ];

    /// Get the wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::CustomerName => "customer_name",
            ClaimField::AdjusterName => "adjuster_name",
            ClaimField::ClaimNumber => "claim_number",
            ClaimField::DateOfLoss => "date_of_loss",
            ClaimField::InspectionLocation => "inspection_location",
            ClaimField::Vin => "vin",
            ClaimField::Year => "year",
            ClaimField::Make => "make",
            ClaimField::Model => "model",
            ClaimField::Mileage => "mileage",
            ClaimField::Damages => "damages",
            ClaimField::DaysToRepair => "days_to_repair",
        }
    }

    /// Look up a field by its exact wire name
    ///
    /// Matching is case-sensitive: `"VIN"` is not `"vin"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use claimcipher_domain::ClaimField;
    ///
    /// assert_eq!(ClaimField::from_key("make"), Some(ClaimField::Make));
    /// assert_eq!(ClaimField::from_key("Make"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }

    /// Whether a user override for this field must parse as a number
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ClaimField::Year | ClaimField::Mileage | ClaimField::DaysToRepair
        )
    }

    /// Whether the VIN decoder may supply this field
    pub fn is_vehicle_identity(&self) -> bool {
        matches!(self, ClaimField::Year | ClaimField::Make | ClaimField::Model)
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClaimField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("Unknown claim field: {}", s))
    }
}
