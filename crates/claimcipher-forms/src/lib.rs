//! Claim Cipher Forms
//!
//! Everything that leaves the pipeline as a document: the filled claim
//! form and the plain-text claim summary.
//!
//! # Architecture
//!
//! ```text
//! CanonicalClaimRecord ─┬→ fill(template fields) → FormFieldMapping → PdfForm::apply
//!                       └→ build_summary → SummaryRenderer → bytes
//! ```
//!
//! The mapping step is pure and knows nothing about PDF; `PdfForm` is the
//! only code that touches the template document.
//!
//! # Examples
//!
//! ```
//! use claimcipher_domain::{CanonicalClaimRecord, ClaimField};
//! use claimcipher_forms::{fill, TemplateField};
//!
//! let template = vec![
//!     TemplateField::new("vin", None),
//!     TemplateField::new("office", Some("Main St".to_string())),
//! ];
//! let record = CanonicalClaimRecord::from_values([(ClaimField::Vin, "1HGCM82633A004352")]);
//!
//! let mapping = fill(&template, &record);
//! assert_eq!(mapping.get("vin"), Some("1HGCM82633A004352"));
//! assert_eq!(mapping.get("office"), Some("Main St"));
//! assert_eq!(mapping.updated_count(), 1);
//! ```

#![warn(missing_docs)]

mod error;
mod filler;
mod pdf_form;
mod render;
mod summary;

#[cfg(test)]
mod tests;

pub use error::FormError;
pub use filler::{fill, FormFieldMapping, FormFieldValue, TemplateField};
pub use pdf_form::{fill_template, FilledForm, PdfForm};
pub use render::TextRenderer;
pub use summary::{build_summary, format_dollars, ClaimSummaryInput};
