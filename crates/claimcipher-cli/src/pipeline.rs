//! The end-to-end claim pipeline.
//!
//! ```text
//! estimate → EstimateParser → MatchedFields ─┐
//! VIN → IdentifierDecoder → DecodedAttributes ├→ RecordAssembler → record
//! user overrides ─────────────────────────────┘
//! record → { valuation → bids, form fill, summary }
//! ```
//!
//! Only an unreadable estimate stops the run. Decoder failures and an
//! unreadable template are logged and carried in the outcome.

use crate::error::{CliError, Result};
use crate::output::record_json;
use claimcipher_assembler::{
    generate_bids, AssembledRecord, RecordAssembler, SystemClock, ValuationEstimator,
};
use claimcipher_domain::traits::{Clock, IdentifierDecoder, SummaryRenderer, TextExtractor};
use claimcipher_domain::{ClaimField, DecodedAttributes, Overrides, SalvageBid};
use claimcipher_extractor::{EstimateParser, ExtractorError, ParsedEstimate};
use claimcipher_forms::{
    build_summary, fill_template, ClaimSummaryInput, FilledForm, FormError,
};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Record dump filename.
pub const RECORD_FILE: &str = "assembled_data.json";

/// Filled template filename.
pub const FORM_FILE: &str = "filled_bcif.pdf";

/// Summary filename without extension.
pub const SUMMARY_STEM: &str = "claim_summary";

/// One claim to process.
#[derive(Debug, Clone)]
pub struct ClaimRequest {
    /// Estimate document
    pub estimate: PathBuf,

    /// Blank form template
    pub template: PathBuf,

    /// Values supplied by the user
    pub overrides: Overrides,

    /// Whether the vehicle is treated as a total loss
    pub total_loss: bool,
}

/// Everything one run produced.
#[derive(Debug)]
pub struct ClaimOutcome {
    /// Fields matched in the estimate
    pub parsed: ParsedEstimate,

    /// Attributes decoded from the VIN (empty when decoding failed or was skipped)
    pub decoded: DecodedAttributes,

    /// Why decoding produced nothing, if it was attempted
    pub decode_error: Option<String>,

    /// The merged record with provenance
    pub assembled: AssembledRecord,

    /// Depreciated reference value
    pub valuation: Option<u64>,

    /// Placeholder salvage bids
    pub bids: Vec<SalvageBid>,

    /// Summary text
    pub summary: String,

    /// The filled template, or why it could not be produced
    pub form: std::result::Result<FilledForm, FormError>,
}

/// Files written for one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Record dump
    pub record: PathBuf,

    /// Filled template, absent when the fill failed
    pub form: Option<PathBuf>,

    /// Rendered summary
    pub summary: PathBuf,
}

/// Runs every stage for one claim.
pub struct ClaimPipeline<E, D, C = SystemClock>
where
    E: TextExtractor<Error = ExtractorError>,
    D: IdentifierDecoder,
    C: Clock,
{
    parser: EstimateParser<E>,
    decoder: Option<D>,
    estimator: ValuationEstimator<C>,
    assembler: RecordAssembler,
}

impl<E, D, C> ClaimPipeline<E, D, C>
where
    E: TextExtractor<Error = ExtractorError>,
    D: IdentifierDecoder,
    D::Error: Display,
    C: Clock,
{
    /// Create a pipeline. Without a decoder the VIN is never looked up.
    pub fn new(parser: EstimateParser<E>, decoder: Option<D>, estimator: ValuationEstimator<C>) -> Self {
        Self {
            parser,
            decoder,
            estimator,
            assembler: RecordAssembler::new(),
        }
    }

    /// Process one claim.
    ///
    /// # Errors
    ///
    /// Returns `ExtractorError::SourceUnavailable` when the estimate cannot be
    /// opened. Nothing else is fatal.
    pub fn run(&self, request: &ClaimRequest) -> std::result::Result<ClaimOutcome, ExtractorError> {
        let parsed = self.parser.parse(&request.estimate)?;

        for rejected in request.overrides.rejected() {
            warn!(
                "Ignoring {} override '{}': {}",
                rejected.field, rejected.value, rejected.reason
            );
        }

        let vin = request
            .overrides
            .get(ClaimField::Vin)
            .or(parsed.fields.vin.as_deref());
        let (decoded, decode_error) = match vin {
            Some(vin) => self.decode(vin),
            None => (DecodedAttributes::new(), None),
        };

        let assembled = self
            .assembler
            .assemble(&request.overrides, &decoded, &parsed.fields);
        let record = &assembled.record;
        let missing = record.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            info!("No value for: {}", names.join(", "));
        }

        let valuation = self.estimator.estimate(record.get(ClaimField::Year));
        let bids = generate_bids(valuation);
        info!("Estimated reference value: {:?}", valuation);

        let form = fill_template(&request.template, record);
        if let Err(e) = &form {
            warn!("Form not filled: {}", e);
        }

        let summary = build_summary(&ClaimSummaryInput {
            record,
            valuation,
            bids: &bids,
            total_loss: request.total_loss,
        });

        Ok(ClaimOutcome {
            parsed,
            decoded,
            decode_error,
            assembled,
            valuation,
            bids,
            summary,
            form,
        })
    }

    fn decode(&self, vin: &str) -> (DecodedAttributes, Option<String>) {
        let Some(decoder) = &self.decoder else {
            return (DecodedAttributes::new(), None);
        };

        match decoder.decode(vin) {
            Ok(attributes) if attributes.is_empty() => {
                warn!("VIN {} decoded to no data", vin);
                (attributes, Some("decoder returned no data".to_string()))
            }
            Ok(attributes) => {
                info!("VIN decoded: {:?}", attributes.basic_attributes());
                (attributes, None)
            }
            Err(e) => {
                warn!("VIN decoding failed: {}", e);
                (DecodedAttributes::new(), Some(e.to_string()))
            }
        }
    }
}

/// Write the record dump, the filled template and the rendered summary.
///
/// The output directory is created if missing. The template file is only
/// written when the fill succeeded.
pub fn write_outputs<R>(outcome: &ClaimOutcome, output_dir: &Path, renderer: &R) -> Result<OutputPaths>
where
    R: SummaryRenderer,
    CliError: From<R::Error>,
{
    fs::create_dir_all(output_dir)?;

    let record = output_dir.join(RECORD_FILE);
    let json = serde_json::to_string_pretty(&record_json(&outcome.assembled.record))?;
    fs::write(&record, json)?;

    let form = match &outcome.form {
        Ok(filled) => {
            let path = output_dir.join(FORM_FILE);
            fs::write(&path, &filled.bytes)?;
            Some(path)
        }
        Err(_) => None,
    };

    let summary = output_dir
        .join(SUMMARY_STEM)
        .with_extension(renderer.file_extension());
    fs::write(&summary, renderer.render(&outcome.summary)?)?;

    info!("Outputs written to {}", output_dir.display());
    Ok(OutputPaths {
        record,
        form,
        summary,
    })
}
