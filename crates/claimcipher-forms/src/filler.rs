//! Record-to-template field mapping

use claimcipher_domain::CanonicalClaimRecord;
use tracing::debug;

/// A named field found in a form template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateField {
    /// Field name as stored in the template
    pub name: String,

    /// Value the template currently holds
    pub value: Option<String>,
}

impl TemplateField {
    /// Create a template field
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The value a template field ends up with after filling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldValue {
    /// Field name as stored in the template
    pub name: String,

    /// Value to write, or the untouched template value
    pub value: Option<String>,

    /// True when the value came from the record, so any cached
    /// appearance of the field is stale
    pub refresh_appearance: bool,
}

/// Template fields in template order, with their filled values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFieldMapping {
    fields: Vec<FormFieldValue>,
}

impl FormFieldMapping {
    /// Value of the first field with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.value.as_deref())
    }

    /// All fields in template order
    pub fn iter(&self) -> impl Iterator<Item = &FormFieldValue> {
        self.fields.iter()
    }

    /// Fields whose value was set from the record
    pub fn updated(&self) -> impl Iterator<Item = &FormFieldValue> {
        self.fields.iter().filter(|f| f.refresh_appearance)
    }

    /// Number of fields set from the record
    pub fn updated_count(&self) -> usize {
        self.updated().count()
    }

    /// Number of template fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the template had no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Map a record onto the fields of a template
///
/// A template field is set when its name is exactly (case-sensitively) the
/// wire name of a record field that has a value. Every other field keeps its
/// template value. Record fields with no template counterpart are ignored.
pub fn fill(template: &[TemplateField], record: &CanonicalClaimRecord) -> FormFieldMapping {
    let fields = template
        .iter()
        .map(|field| match record.get_by_key(&field.name) {
            Some(value) => FormFieldValue {
                name: field.name.clone(),
                value: Some(value.to_string()),
                refresh_appearance: true,
            },
            None => FormFieldValue {
                name: field.name.clone(),
                value: field.value.clone(),
                refresh_appearance: false,
            },
        })
        .collect();

    let mapping = FormFieldMapping { fields };
    debug!(
        "Filled {} of {} template field(s)",
        mapping.updated_count(),
        mapping.len()
    );
    mapping
}
