//! Source reconciliation

use claimcipher_domain::{
    CanonicalClaimRecord, ClaimField, DecodedAttributes, FieldSource, MatchedFields, Overrides,
};
use std::collections::BTreeMap;
use tracing::debug;

/// The canonical record plus where each value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledRecord {
    /// The merged record
    pub record: CanonicalClaimRecord,

    /// Source of every present field
    pub sources: BTreeMap<ClaimField, FieldSource>,
}

impl AssembledRecord {
    /// Source of a field, `None` if the field is absent
    pub fn source(&self, field: ClaimField) -> Option<FieldSource> {
        self.sources.get(&field).copied()
    }
}

/// Merges overrides, decoded VIN attributes and matched estimate fields
///
/// Precedence is resolved independently for every field, highest first:
///
/// 1. explicit user override
/// 2. decoded attribute (model year, make and model only)
/// 3. value matched in the estimate text
/// 4. absent
///
/// Blank strings never count as a value. The merge is pure: no I/O and no
/// errors, unresolved fields are simply absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordAssembler;

impl RecordAssembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self
    }

    /// Build the canonical record
    pub fn assemble(
        &self,
        overrides: &Overrides,
        decoded: &DecodedAttributes,
        matched: &MatchedFields,
    ) -> AssembledRecord {
        let mut values = Vec::new();
        let mut sources = BTreeMap::new();

        for field in ClaimField::ALL {
            let candidates = [
                (FieldSource::Override, overrides.get(field)),
                (FieldSource::Decoder, decoded_value(decoded, field)),
                (FieldSource::Matcher, matched.get(field)),
            ];

            let resolved = candidates
                .into_iter()
                .find_map(|(source, value)| present(value).map(|v| (source, v)));

            if let Some((source, value)) = resolved {
                debug!("{} <- {} ({})", field, value, source);
                values.push((field, value.to_string()));
                sources.insert(field, source);
            }
        }

        AssembledRecord {
            record: CanonicalClaimRecord::from_values(values),
            sources,
        }
    }
}

/// Decoder values only ever feed the vehicle identity fields
fn decoded_value(decoded: &DecodedAttributes, field: ClaimField) -> Option<&str> {
    match field {
        ClaimField::Year => decoded.model_year(),
        ClaimField::Make => decoded.make(),
        ClaimField::Model => decoded.model(),
        _ => None,
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
