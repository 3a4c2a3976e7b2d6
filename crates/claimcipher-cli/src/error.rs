//! Error types for the CLI application.

use claimcipher_decoder::DecoderError;
use claimcipher_extractor::ExtractorError;
use claimcipher_forms::FormError;
use std::convert::Infallible;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Estimate could not be read
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// VIN decoding error
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    /// Form template error
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<Infallible> for CliError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
