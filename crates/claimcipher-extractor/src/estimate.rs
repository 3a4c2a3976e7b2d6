//! Estimate parsing: text extraction followed by field matching

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::matcher::FieldMatcher;
use crate::pdf::PdfTextExtractor;
use crate::plain::PlainTextExtractor;
use claimcipher_domain::traits::TextExtractor;
use claimcipher_domain::{ExtractedText, MatchedFields};
use std::path::Path;
use tracing::{info, warn};

/// Picks the text backend from the file extension
///
/// `.txt` files are read as plain text; everything else is treated as a PDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoExtractor;

impl TextExtractor for AutoExtractor {
    type Error = ExtractorError;

    fn extract(
        &self,
        path: &Path,
        max_pages: Option<usize>,
    ) -> Result<ExtractedText, Self::Error> {
        let is_text = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

        if is_text {
            PlainTextExtractor.extract(path, max_pages)
        } else {
            PdfTextExtractor.extract(path, max_pages)
        }
    }
}

/// Result of parsing one estimate
#[derive(Debug, Clone)]
pub struct ParsedEstimate {
    /// Fields located in the text
    pub fields: MatchedFields,

    /// Pages visited
    pub pages_read: usize,

    /// Pages that yielded text
    pub pages_with_text: usize,
}

impl ParsedEstimate {
    /// Whether the document produced no text at all
    pub fn is_text_empty(&self) -> bool {
        self.pages_with_text == 0
    }
}

/// Reads an estimate document and matches its fields
pub struct EstimateParser<E>
where
    E: TextExtractor<Error = ExtractorError>,
{
    extractor: E,
    matcher: FieldMatcher,
    config: ExtractorConfig,
}

impl<E> EstimateParser<E>
where
    E: TextExtractor<Error = ExtractorError>,
{
    /// Create a parser, compiling the field rules
    pub fn new(extractor: E, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let matcher = FieldMatcher::with_config(&config)?;
        Ok(Self {
            extractor,
            matcher,
            config,
        })
    }

    /// The field matcher in use
    pub fn matcher(&self) -> &FieldMatcher {
        &self.matcher
    }

    /// Parse the estimate at `path`
    ///
    /// Fails only when the document cannot be opened. A document with no
    /// extractable text is logged and yields an all-absent record.
    pub fn parse(&self, path: &Path) -> Result<ParsedEstimate, ExtractorError> {
        info!("Parsing estimate {}", path.display());

        let extracted = self.extractor.extract(path, self.config.max_pages)?;
        if extracted.is_empty() {
            warn!(
                "No text could be extracted from {} ({} page(s) read)",
                path.display(),
                extracted.pages_read
            );
        }

        let fields = self.matcher.match_text(&extracted.text);

        info!("Estimate parsed: {} of 6 fields found", fields.found_count());

        Ok(ParsedEstimate {
            fields,
            pages_read: extracted.pages_read,
            pages_with_text: extracted.pages_with_text,
        })
    }
}
