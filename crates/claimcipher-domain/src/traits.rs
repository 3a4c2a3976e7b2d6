//! Trait definitions for external interactions
//!
//! These traits define the boundaries between claim processing and
//! infrastructure. Implementations live in other crates.

use crate::{DecodedAttributes, ExtractedText};
use std::path::Path;

/// Trait for turning a paginated document into text
///
/// Implemented by the infrastructure layer (claimcipher-extractor)
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract text from the document at `path`, reading at most `max_pages`
    fn extract(&self, path: &Path, max_pages: Option<usize>)
        -> Result<ExtractedText, Self::Error>;
}

/// Trait for decoding a vehicle identification number
///
/// Implemented by the infrastructure layer (claimcipher-decoder)
pub trait IdentifierDecoder {
    /// Error type for decode operations
    type Error;

    /// Decode a 17-character VIN into a flat attribute map
    ///
    /// An empty map is a valid answer and means nothing could be decoded.
    fn decode(&self, vin: &str) -> Result<DecodedAttributes, Self::Error>;
}

/// Source of the current calendar year
pub trait Clock {
    /// The current calendar year
    fn current_year(&self) -> i32;
}

/// Trait for turning summary text into a document
///
/// Implemented by the infrastructure layer (claimcipher-forms)
pub trait SummaryRenderer {
    /// Error type for render operations
    type Error;

    /// Render the summary text into document bytes
    fn render(&self, text: &str) -> Result<Vec<u8>, Self::Error>;

    /// File extension of the rendered document, without the dot
    fn file_extension(&self) -> &'static str;
}
