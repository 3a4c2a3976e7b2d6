//! PDF text extraction backed by `lopdf`

use crate::error::ExtractorError;
use claimcipher_domain::traits::TextExtractor;
use claimcipher_domain::ExtractedText;
use lopdf::Document;
use std::path::Path;
use tracing::{debug, info};

/// Extracts the text of every page of a PDF
///
/// Pages whose text cannot be extracted (images, unsupported fonts) are
/// skipped rather than failing the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract text from an in-memory PDF
    pub fn extract_bytes(
        &self,
        bytes: &[u8],
        max_pages: Option<usize>,
    ) -> Result<ExtractedText, ExtractorError> {
        let document = Document::load_mem(bytes).map_err(|e| {
            ExtractorError::unavailable(Path::new("<memory>"), e)
        })?;
        Ok(extract_document(&document, max_pages))
    }
}

impl TextExtractor for PdfTextExtractor {
    type Error = ExtractorError;

    fn extract(
        &self,
        path: &Path,
        max_pages: Option<usize>,
    ) -> Result<ExtractedText, Self::Error> {
        if !path.is_file() {
            return Err(ExtractorError::unavailable(path, "file not found"));
        }

        let document = Document::load(path).map_err(|e| ExtractorError::unavailable(path, e))?;
        let extracted = extract_document(&document, max_pages);

        info!(
            "Read {} page(s) from {}, {} with text",
            extracted.pages_read,
            path.display(),
            extracted.pages_with_text
        );
        Ok(extracted)
    }
}

fn extract_document(document: &Document, max_pages: Option<usize>) -> ExtractedText {
    let pages = document.get_pages();
    let limit = max_pages.unwrap_or(usize::MAX);

    let texts: Vec<String> = pages
        .keys()
        .take(limit)
        .map(|&page_number| match document.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                debug!("No text on page {}: {}", page_number, e);
                String::new()
            }
        })
        .collect();

    ExtractedText::from_pages(texts)
}
