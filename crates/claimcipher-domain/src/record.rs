//! Record module - the merged, authoritative claim record

use crate::field::ClaimField;
use std::collections::BTreeMap;
use std::fmt;

/// Where a value in the canonical record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSource {
    /// Supplied explicitly by the user
    Override,

    /// Returned by the VIN decoder
    Decoder,

    /// Found in the estimate text
    Matcher,
}

impl FieldSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSource::Override => "override",
            FieldSource::Decoder => "decoder",
            FieldSource::Matcher => "matcher",
        }
    }
}

impl fmt::Display for FieldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single source of truth for valuation, form filling and the summary
///
/// Built once per run and never mutated: there is no API to change a value
/// after construction. Absent fields are simply not stored; iteration still
/// visits every [`ClaimField`] so serializers can emit explicit nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalClaimRecord {
    values: BTreeMap<ClaimField, String>,
}

impl CanonicalClaimRecord {
    /// Build a record from resolved values, dropping blank ones
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (ClaimField, V)>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(field, value)| (field, value.into()))
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();
        Self { values }
    }

    /// Get the value of a field
    pub fn get(&self, field: ClaimField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Get a value by its wire name (exact, case-sensitive)
    pub fn get_by_key(&self, key: &str) -> Option<&str> {
        ClaimField::from_key(key).and_then(|field| self.get(field))
    }

    /// Iterate over every field in record order, absent ones as `None`
    pub fn iter(&self) -> impl Iterator<Item = (ClaimField, Option<&str>)> + '_ {
        ClaimField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Number of present fields
    pub fn present_count(&self) -> usize {
        self.values.len()
    }

    /// Fields with no value
    pub fn missing_fields(&self) -> Vec<ClaimField> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect()
    }
}
