//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::pipeline::{ClaimOutcome, OutputPaths};
use claimcipher_domain::{CanonicalClaimRecord, DecodedAttributes, MatchedFields};
use claimcipher_extractor::ParsedEstimate;
use claimcipher_forms::{format_dollars, TemplateField};
use colored::{Color, Colorize};
use serde_json::{json, Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const EMPTY_CELL: &str = "-";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the result of a full claim run.
    pub fn format_outcome(&self, outcome: &ClaimOutcome, paths: &OutputPaths) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&outcome_json(outcome, paths))?),
            OutputFormat::Table => Ok(self.outcome_table(outcome, paths)),
            OutputFormat::Quiet => {
                let mut lines = vec![paths.record.display().to_string()];
                if let Some(form) = &paths.form {
                    lines.push(form.display().to_string());
                }
                lines.push(paths.summary.display().to_string());
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the fields matched in an estimate.
    pub fn format_parsed(&self, parsed: &ParsedEstimate) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "fields": matched_json(&parsed.fields),
                "pages_read": parsed.pages_read,
                "pages_with_text": parsed.pages_with_text,
            }))?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (field, value) in parsed.fields.iter() {
                    builder.push_record([field.as_str(), value.unwrap_or(EMPTY_CELL)]);
                }
                let mut output = self.table(builder);
                if parsed.is_text_empty() {
                    output.push('\n');
                    output.push_str(&self.warning("No text could be extracted from the estimate"));
                }
                Ok(output)
            }
            OutputFormat::Quiet => Ok(parsed
                .fields
                .iter()
                .filter_map(|(field, value)| value.map(|v| format!("{}={}", field, v)))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format decoded VIN attributes.
    pub fn format_decoded(&self, vin: &str, decoded: &DecodedAttributes) -> Result<String> {
        let basic = decoded.basic_attributes();
        match self.format {
            OutputFormat::Json => {
                let attributes: Map<String, Value> = basic
                    .iter()
                    .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
                    .collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "vin": vin,
                    "attributes": attributes,
                }))?)
            }
            OutputFormat::Table => {
                if basic.is_empty() {
                    return Ok(self.warning(&format!("No data decoded for {}", vin)));
                }
                let mut builder = Builder::default();
                builder.push_record(["Attribute", "Value"]);
                for (name, value) in &basic {
                    builder.push_record([*name, *value]);
                }
                Ok(self.table(builder))
            }
            OutputFormat::Quiet => Ok(basic
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the fields of a form template.
    pub fn format_fields(&self, fields: &[TemplateField]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let fields: Vec<Value> = fields
                    .iter()
                    .map(|f| json!({ "name": f.name, "value": f.value }))
                    .collect();
                Ok(serde_json::to_string_pretty(&fields)?)
            }
            OutputFormat::Table => {
                if fields.is_empty() {
                    return Ok(self.warning("No named fields found."));
                }
                let mut builder = Builder::default();
                builder.push_record(["Name", "Current Value"]);
                for field in fields {
                    builder.push_record([
                        field.name.as_str(),
                        field.value.as_deref().unwrap_or(EMPTY_CELL),
                    ]);
                }
                Ok(self.table(builder))
            }
            OutputFormat::Quiet => Ok(fields
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), Color::Red)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    fn outcome_table(&self, outcome: &ClaimOutcome, paths: &OutputPaths) -> String {
        let assembled = &outcome.assembled;
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value", "Source"]);
        for (field, value) in assembled.record.iter() {
            let source = assembled
                .source(field)
                .map(|s| s.as_str())
                .unwrap_or(EMPTY_CELL);
            builder.push_record([field.as_str(), value.unwrap_or(EMPTY_CELL), source]);
        }

        let mut lines = vec![self.table(builder)];

        if let Some(error) = &outcome.decode_error {
            lines.push(self.warning(&format!("VIN decoding: {}", error)));
        }
        match outcome.valuation {
            Some(value) => lines.push(self.info(&format!(
                "Estimated NADA value: {}",
                format_dollars(value)
            ))),
            None => lines.push(self.warning("No reference value (model year unknown)")),
        }
        for bid in &outcome.bids {
            lines.push(format!("  • {}: {}", bid.vendor, format_dollars(bid.amount)));
        }

        match (&outcome.form, &paths.form) {
            (Ok(filled), Some(path)) => lines.push(self.success(&format!(
                "Filled {} form field(s): {}",
                filled.mapping.updated_count(),
                path.display()
            ))),
            (Err(e), _) => lines.push(self.error(&format!("Form not filled: {}", e))),
            _ => {}
        }
        lines.push(self.success(&format!("Record saved to {}", paths.record.display())));
        lines.push(self.success(&format!("Summary saved to {}", paths.summary.display())));

        lines.join("\n")
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

/// Every canonical field by wire name, `null` when absent.
pub fn record_json(record: &CanonicalClaimRecord) -> Value {
    let fields: Map<String, Value> = record
        .iter()
        .map(|(field, value)| (field.as_str().to_string(), optional_string(value)))
        .collect();
    Value::Object(fields)
}

/// The six matched fields by wire name, `null` when absent.
pub fn matched_json(fields: &MatchedFields) -> Value {
    let fields: Map<String, Value> = fields
        .iter()
        .map(|(field, value)| (field.as_str().to_string(), optional_string(value)))
        .collect();
    Value::Object(fields)
}

fn outcome_json(outcome: &ClaimOutcome, paths: &OutputPaths) -> Value {
    let sources: Map<String, Value> = outcome
        .assembled
        .sources
        .iter()
        .map(|(field, source)| (field.as_str().to_string(), json!(source.as_str())))
        .collect();
    let decoded: Map<String, Value> = outcome
        .decoded
        .basic_attributes()
        .iter()
        .map(|(name, value)| (name.to_string(), json!(value)))
        .collect();
    let bids: Vec<Value> = outcome
        .bids
        .iter()
        .map(|b| json!({ "vendor": b.vendor, "bid": b.amount }))
        .collect();
    let form = match &outcome.form {
        Ok(filled) => json!({ "filled_fields": filled.mapping.updated_count() }),
        Err(e) => json!({ "error": e.to_string() }),
    };

    json!({
        "record": record_json(&outcome.assembled.record),
        "sources": sources,
        "decoded": decoded,
        "decode_error": outcome.decode_error,
        "nada_value": outcome.valuation,
        "salvage_bids": bids,
        "form": form,
        "outputs": {
            "record": paths.record.display().to_string(),
            "form": paths.form.as_ref().map(|p| p.display().to_string()),
            "summary": paths.summary.display().to_string(),
        },
    })
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimcipher_domain::ClaimField;

    fn parsed() -> ParsedEstimate {
        ParsedEstimate {
            fields: MatchedFields {
                vin: Some("1HGCM82633A004352".to_string()),
                make: Some("Honda".to_string()),
                ..Default::default()
            },
            pages_read: 2,
            pages_with_text: 2,
        }
    }

    #[test]
    fn test_record_json_has_every_field() {
        let record = CanonicalClaimRecord::from_values([(ClaimField::Make, "Toyota")]);
        let value = record_json(&record);
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 12);
        assert_eq!(object["make"], json!("Toyota"));
        assert_eq!(object["days_to_repair"], Value::Null);
    }

    #[test]
    fn test_parsed_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_parsed(&parsed()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["fields"]["vin"], json!("1HGCM82633A004352"));
        assert_eq!(value["fields"]["year"], Value::Null);
        assert_eq!(value["pages_read"], json!(2));
    }

    #[test]
    fn test_parsed_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_parsed(&parsed()).unwrap();
        assert!(output.contains("Field"));
        assert!(output.contains("Honda"));
        assert!(!output.contains("No text"));
    }

    #[test]
    fn test_parsed_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_parsed(&parsed()).unwrap();
        assert_eq!(output, "vin=1HGCM82633A004352\nmake=Honda");
    }

    #[test]
    fn test_decoded_table_empty() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_decoded("1HGCM82633A004352", &DecodedAttributes::new())
            .unwrap();
        assert!(output.contains("No data decoded"));
    }

    #[test]
    fn test_fields_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let fields = vec![
            TemplateField::new("vin", None),
            TemplateField::new("make", Some("Honda".to_string())),
        ];
        assert_eq!(formatter.format_fields(&fields).unwrap(), "vin\nmake");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
