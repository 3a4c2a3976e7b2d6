//! Claim Cipher Domain Layer
//!
//! This crate holds the value types and trait interfaces shared by every other
//! crate in the workspace. It has no external runtime dependencies: document
//! parsing, HTTP and PDF handling live in the infrastructure crates.
//!
//! ## Key Concepts
//!
//! - **ClaimField**: the closed set of canonical claim/vehicle keys
//! - **MatchedFields**: the sparse record produced by pattern matching estimate text
//! - **DecodedAttributes**: the flat attribute map returned by a VIN decoder
//! - **Overrides**: explicit values supplied by the user
//! - **CanonicalClaimRecord**: the merged, immutable record every output is built from
//!
//! ## Architecture
//!
//! ```text
//! TextExtractor -> FieldMatcher -> (IdentifierDecoder, Overrides)
//!     -> RecordAssembler -> { valuation, form filling, summary }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bid;
pub mod decoded;
pub mod field;
pub mod matched;
pub mod overrides;
pub mod record;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use bid::SalvageBid;
pub use decoded::DecodedAttributes;
pub use field::ClaimField;
pub use matched::MatchedFields;
pub use overrides::{Overrides, RejectedOverride};
pub use record::{CanonicalClaimRecord, FieldSource};
pub use text::ExtractedText;
