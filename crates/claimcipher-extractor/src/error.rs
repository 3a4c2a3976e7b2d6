//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The document does not exist or cannot be opened
    #[error("Source unavailable: {path}: {reason}")]
    SourceUnavailable {
        /// Path that was requested
        path: String,
        /// What went wrong
        reason: String,
    },

    /// A matcher pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    pub(crate) fn unavailable(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        ExtractorError::SourceUnavailable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
