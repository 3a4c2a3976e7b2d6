//! Claim Cipher Extractor
//!
//! Turns estimate documents into the sparse field record the assembler merges.
//!
//! # Architecture
//!
//! ```text
//! Document → TextExtractor → ExtractedText → FieldMatcher → MatchedFields
//! ```
//!
//! # Key Features
//!
//! - **PDF text extraction**: every page (or the first `max_pages`) via `lopdf`
//! - **Plain text input**: `.txt` estimates, pages split on form feeds
//! - **Pattern matching**: VIN, year, make, model, mileage and damages with
//!   leftmost-first, never-guess rules
//!
//! # Example Usage
//!
//! ```no_run
//! use claimcipher_extractor::{AutoExtractor, EstimateParser, ExtractorConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = EstimateParser::new(AutoExtractor, ExtractorConfig::default())?;
//! let parsed = parser.parse(Path::new("input/estimate.pdf"))?;
//!
//! println!("VIN: {:?}", parsed.fields.vin);
//! println!("Found {} of 6 fields", parsed.fields.found_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod estimate;
mod matcher;
mod pdf;
mod plain;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use estimate::{AutoExtractor, EstimateParser, ParsedEstimate};
pub use matcher::FieldMatcher;
pub use pdf::PdfTextExtractor;
pub use plain::PlainTextExtractor;
