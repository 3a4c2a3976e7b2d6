//! Decoded module - attributes returned by a VIN decoder

use std::collections::BTreeMap;

/// Decoder attribute holding the model year
pub const MODEL_YEAR: &str = "ModelYear";

/// Decoder attribute holding the make
pub const MAKE: &str = "Make";

/// Decoder attribute holding the model
pub const MODEL: &str = "Model";

/// Attributes worth showing to a user, in display order
pub const BASIC_ATTRIBUTES: [&str; 8] = [
    MODEL_YEAR,
    MAKE,
    MODEL,
    "Trim",
    "BodyClass",
    "VehicleType",
    "EngineCylinders",
    "FuelTypePrimary",
];

/// Flat attribute map produced by decoding a VIN
///
/// Keys follow the decoder's own vocabulary (`ModelYear`, `Make`, `Model`,
/// ...). Blank values are dropped on insertion, so every stored value is a
/// non-empty string. An empty map means "nothing decoded".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedAttributes {
    values: BTreeMap<String, String>,
}

impl DecodedAttributes {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, ignoring blank values
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        self.values.insert(name.into(), trimmed.to_string());
    }

    /// Get an attribute by decoder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Decoded model year, if any
    pub fn model_year(&self) -> Option<&str> {
        self.get(MODEL_YEAR)
    }

    /// Decoded make, if any
    pub fn make(&self) -> Option<&str> {
        self.get(MAKE)
    }

    /// Decoded model, if any
    pub fn model(&self) -> Option<&str> {
        self.get(MODEL)
    }

    /// The subset of [`BASIC_ATTRIBUTES`] that is present, in display order
    pub fn basic_attributes(&self) -> Vec<(&'static str, &str)> {
        BASIC_ATTRIBUTES
            .iter()
            .filter_map(|name| self.get(name).map(|value| (*name, value)))
            .collect()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was decoded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all attributes in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for DecodedAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}
