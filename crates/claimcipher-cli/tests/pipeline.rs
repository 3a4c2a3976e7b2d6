//! Integration tests for the claim pipeline

use claimcipher_assembler::{FixedClock, ValuationConfig, ValuationEstimator};
use claimcipher_cli::{write_outputs, ClaimPipeline, ClaimRequest};
use claimcipher_decoder::MockDecoder;
use claimcipher_domain::{ClaimField, FieldSource, Overrides};
use claimcipher_extractor::{AutoExtractor, EstimateParser, ExtractorConfig, ExtractorError};
use claimcipher_forms::{FormError, PdfForm, TextRenderer};
use lopdf::{dictionary, Document, Object};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const VIN: &str = "1HGCM82633A004352";

const ESTIMATE: &str = "ESTIMATE OF RECORD\n\
    VIN 1HGCM82633A004352\n\
    Make: Honda\n\
    Model: Accord EX\n\
    Mileage: 45,231\n\
    Damages: Front bumper\n";

/// One-page template with `vin`, `year`, `make` and an unrelated `office` widget
fn template_bytes() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut widgets: Vec<Object> = Vec::new();
    for (name, value) in [("vin", ""), ("year", ""), ("make", ""), ("office", "Main St")] {
        let id = doc.add_object(dictionary! {
            "Type" => "Annot",
            "Subtype" => "Widget",
            "FT" => "Tx",
            "T" => Object::string_literal(name),
            "V" => Object::string_literal(value),
        });
        widgets.push(id.into());
    }

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Annots" => widgets.clone(),
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let acroform_id = doc.add_object(dictionary! { "Fields" => widgets });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "AcroForm" => acroform_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

struct Fixture {
    dir: TempDir,
    estimate: PathBuf,
    template: PathBuf,
}

impl Fixture {
    fn new(estimate: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let estimate_path = dir.path().join("estimate.txt");
        fs::write(&estimate_path, estimate).unwrap();
        let template = dir.path().join("CCC BCIF.pdf");
        fs::write(&template, template_bytes()).unwrap();

        Self {
            dir,
            estimate: estimate_path,
            template,
        }
    }

    fn request(&self, overrides: Overrides) -> ClaimRequest {
        ClaimRequest {
            estimate: self.estimate.clone(),
            template: self.template.clone(),
            overrides,
            total_loss: false,
        }
    }

    fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }
}

fn pipeline(decoder: MockDecoder) -> ClaimPipeline<AutoExtractor, MockDecoder, FixedClock> {
    let parser = EstimateParser::new(AutoExtractor, ExtractorConfig::default()).unwrap();
    let estimator = ValuationEstimator::new(ValuationConfig::default(), FixedClock::new(2025));
    ClaimPipeline::new(parser, Some(decoder), estimator)
}

fn honda_decoder() -> MockDecoder {
    let mut decoder = MockDecoder::new();
    decoder.add_vehicle(VIN, "2003", "Honda", "Accord");
    decoder
}

#[test]
fn test_estimate_scenario_end_to_end() {
    let fixture = Fixture::new(ESTIMATE);
    let outcome = pipeline(honda_decoder())
        .run(&fixture.request(Overrides::new()))
        .unwrap();
    let record = &outcome.assembled.record;

    assert_eq!(record.get(ClaimField::Vin), Some(VIN));
    assert_eq!(record.get(ClaimField::Year), Some("2003"));
    assert_eq!(record.get(ClaimField::Make), Some("Honda"));
    assert_eq!(record.get(ClaimField::Model), Some("Accord"));
    assert_eq!(record.get(ClaimField::Mileage), Some("45231"));
    assert_eq!(record.get(ClaimField::Damages), Some("Front bumper"));
    assert_eq!(outcome.parsed.fields.model.as_deref(), Some("Accord EX"));
    assert_eq!(outcome.assembled.source(ClaimField::Model), Some(FieldSource::Decoder));
    assert_eq!(outcome.assembled.source(ClaimField::Mileage), Some(FieldSource::Matcher));
    assert!(outcome.decode_error.is_none());

    assert_eq!(outcome.valuation, Some(6_078));
    let amounts: Vec<u64> = outcome.bids.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![2_735, 2_431, 2_553]);

    assert!(outcome.summary.contains("Vehicle: 2003 Honda Accord"));
    assert!(outcome.summary.contains("Estimated NADA Value: $6,078"));
    assert!(outcome.summary.ends_with("Conclusion: Repairable"));

    let filled = outcome.form.as_ref().unwrap();
    assert_eq!(filled.mapping.updated_count(), 3);
    assert_eq!(filled.mapping.get("office"), Some("Main St"));
}

#[test]
fn test_outputs_are_written() {
    let fixture = Fixture::new(ESTIMATE);
    let outcome = pipeline(honda_decoder())
        .run(&fixture.request(Overrides::new().with(ClaimField::CustomerName, "John Doe")))
        .unwrap();

    let output_dir = fixture.output_dir();
    let paths = write_outputs(&outcome, &output_dir, &TextRenderer::new()).unwrap();

    assert_eq!(paths.record, output_dir.join("assembled_data.json"));
    assert_eq!(paths.summary, output_dir.join("claim_summary.txt"));
    assert_eq!(paths.form.as_deref(), Some(output_dir.join("filled_bcif.pdf").as_path()));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.record).unwrap()).unwrap();
    assert_eq!(json["year"], "2003");
    assert_eq!(json["customer_name"], "John Doe");
    assert!(json["adjuster_name"].is_null());

    let summary = fs::read_to_string(&paths.summary).unwrap();
    assert!(summary.starts_with("Claim Number: N/A\nCustomer Name: John Doe\n"));
    assert!(summary.ends_with("Conclusion: Repairable\n"));

    let form = PdfForm::load(paths.form.as_deref().unwrap()).unwrap();
    let year = form.fields().into_iter().find(|f| f.name == "year").unwrap();
    assert_eq!(year.value.as_deref(), Some("2003"));
}

#[test]
fn test_unreadable_template_keeps_other_outputs() {
    let mut fixture = Fixture::new(ESTIMATE);
    fixture.template = fixture.dir.path().join("missing.pdf");

    let outcome = pipeline(honda_decoder())
        .run(&fixture.request(Overrides::new()))
        .unwrap();
    assert!(matches!(outcome.form, Err(FormError::TemplateUnreadable { .. })));

    let paths = write_outputs(&outcome, &fixture.output_dir(), &TextRenderer::new()).unwrap();
    assert!(paths.form.is_none());
    assert!(paths.record.is_file());
    assert!(paths.summary.is_file());
    assert!(!fixture.output_dir().join("filled_bcif.pdf").exists());
}

#[test]
fn test_decode_failure_falls_back_to_matcher() {
    let fixture = Fixture::new(ESTIMATE);
    let mut decoder = MockDecoder::new();
    decoder.add_error(VIN);

    let outcome = pipeline(decoder)
        .run(&fixture.request(Overrides::new()))
        .unwrap();
    let record = &outcome.assembled.record;

    assert!(outcome.decode_error.is_some());
    assert!(outcome.decoded.is_empty());
    assert_eq!(record.get(ClaimField::Model), Some("Accord EX"));
    assert_eq!(record.get(ClaimField::Year), None);
    assert_eq!(outcome.valuation, None);
    assert!(outcome.bids.is_empty());
    assert!(!outcome.summary.contains("NADA"));
}

#[test]
fn test_unknown_vin_is_reported() {
    let fixture = Fixture::new(ESTIMATE);
    let outcome = pipeline(MockDecoder::new())
        .run(&fixture.request(Overrides::new()))
        .unwrap();

    assert!(outcome.decode_error.is_some());
    assert_eq!(outcome.assembled.record.get(ClaimField::Make), Some("Honda"));
}

#[test]
fn test_overrides_win_and_bad_numbers_fall_through() {
    let fixture = Fixture::new(ESTIMATE);
    let overrides = Overrides::new()
        .with(ClaimField::Make, "Toyota")
        .with(ClaimField::Year, "20O3")
        .with(ClaimField::DaysToRepair, "10");

    let outcome = pipeline(honda_decoder()).run(&fixture.request(overrides)).unwrap();
    let record = &outcome.assembled.record;

    assert_eq!(record.get(ClaimField::Make), Some("Toyota"));
    assert_eq!(record.get(ClaimField::Year), Some("2003"));
    assert_eq!(record.get(ClaimField::DaysToRepair), Some("10"));
    assert_eq!(outcome.assembled.source(ClaimField::Make), Some(FieldSource::Override));
}

#[test]
fn test_vin_override_is_decoded() {
    let fixture = Fixture::new(ESTIMATE);
    let mut decoder = honda_decoder();
    decoder.add_vehicle("2T1BURHE0JC123456", "2018", "Toyota", "Corolla");

    let overrides = Overrides::new().with(ClaimField::Vin, "2T1BURHE0JC123456");
    let outcome = pipeline(decoder).run(&fixture.request(overrides)).unwrap();
    let record = &outcome.assembled.record;

    assert_eq!(record.get(ClaimField::Vin), Some("2T1BURHE0JC123456"));
    assert_eq!(record.get(ClaimField::Make), Some("Toyota"));
    assert_eq!(record.get(ClaimField::Year), Some("2018"));
}

#[test]
fn test_empty_estimate_is_not_fatal() {
    let fixture = Fixture::new("");
    let decoder = honda_decoder();
    let outcome = pipeline(decoder)
        .run(&fixture.request(Overrides::new().with(ClaimField::ClaimNumber, "12345")))
        .unwrap();

    assert!(outcome.parsed.is_text_empty());
    assert!(outcome.decode_error.is_none());
    assert_eq!(outcome.assembled.record.present_count(), 1);
    assert!(outcome.summary.starts_with("Claim Number: 12345\n"));
}

#[test]
fn test_total_loss_conclusion() {
    let fixture = Fixture::new(ESTIMATE);
    let mut request = fixture.request(Overrides::new());
    request.total_loss = true;

    let outcome = pipeline(honda_decoder()).run(&request).unwrap();
    assert!(outcome.summary.ends_with("Conclusion: Total Loss"));
}

#[test]
fn test_missing_estimate_is_fatal_and_writes_nothing() {
    let fixture = Fixture::new(ESTIMATE);
    let mut request = fixture.request(Overrides::new());
    request.estimate = Path::new("/nonexistent/estimate.pdf").to_path_buf();

    let result = pipeline(honda_decoder()).run(&request);
    assert!(matches!(result, Err(ExtractorError::SourceUnavailable { .. })));
    assert!(!fixture.output_dir().exists());
}
