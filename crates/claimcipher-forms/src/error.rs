//! Error types for form filling

use thiserror::Error;

/// Errors that can occur while filling a form template
#[derive(Error, Debug)]
pub enum FormError {
    /// The template cannot be opened or parsed as a PDF
    #[error("Template unreadable: {path}: {reason}")]
    TemplateUnreadable {
        /// Template that was requested
        path: String,
        /// What went wrong
        reason: String,
    },

    /// The filled document could not be serialized or saved
    #[error("Failed to write form: {0}")]
    Write(String),
}

impl FormError {
    pub(crate) fn unreadable(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        FormError::TemplateUnreadable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
