//! Plain text estimates (for example the output of `pdftotext`)
//!
//! Files are expected to be UTF-8. Other encodings are read lossily so a
//! Latin-1 export still yields its ASCII fields.

use crate::error::ExtractorError;
use claimcipher_domain::traits::TextExtractor;
use claimcipher_domain::ExtractedText;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Page separator used by `pdftotext` and most text exporters
const FORM_FEED: char = '\u{000C}';

/// Reads a UTF-8 text file, treating form feeds as page breaks
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain text extractor
    pub fn new() -> Self {
        Self
    }

    /// Split already-loaded text into pages
    pub fn extract_str(&self, contents: &str, max_pages: Option<usize>) -> ExtractedText {
        let limit = max_pages.unwrap_or(usize::MAX);
        ExtractedText::from_pages(
            contents
                .split(FORM_FEED)
                .take(limit)
                .map(|page| page.trim_end_matches(['\r', '\n'])),
        )
    }
}

impl TextExtractor for PlainTextExtractor {
    type Error = ExtractorError;

    fn extract(
        &self,
        path: &Path,
        max_pages: Option<usize>,
    ) -> Result<ExtractedText, Self::Error> {
        let bytes = fs::read(path).map_err(|e| ExtractorError::unavailable(path, e))?;
        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            warn!(
                "{} is not valid UTF-8; undecodable bytes replaced",
                path.display()
            );
        }
        let extracted = self.extract_str(&contents, max_pages);

        info!(
            "Read {} page(s) from {}",
            extracted.pages_read,
            path.display()
        );
        Ok(extracted)
    }
}
