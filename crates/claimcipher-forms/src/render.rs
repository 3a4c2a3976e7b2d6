//! Summary document renderers

use claimcipher_domain::traits::SummaryRenderer;
use std::convert::Infallible;

/// Writes the summary as UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a new text renderer
    pub fn new() -> Self {
        Self
    }
}

impl SummaryRenderer for TextRenderer {
    type Error = Infallible;

    fn render(&self, text: &str) -> Result<Vec<u8>, Self::Error> {
        let mut bytes = text.as_bytes().to_vec();
        if !text.ends_with('\n') {
            bytes.push(b'\n');
        }
        Ok(bytes)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}
