//! Claim Cipher Assembler
//!
//! Reconciles every data source into the canonical claim record and derives
//! the placeholder economics from it.
//!
//! The assembler provides:
//! - Per-field precedence merge (override, then decoder, then matcher)
//! - Provenance for every resolved field
//! - Depreciated reference value from the model year
//! - Synthetic salvage bids from the reference value
//!
//! # Examples
//!
//! ```
//! use claimcipher_assembler::{FixedClock, RecordAssembler, ValuationConfig, ValuationEstimator};
//! use claimcipher_domain::{ClaimField, DecodedAttributes, MatchedFields, Overrides};
//!
//! let matched = MatchedFields {
//!     make: Some("Ford".to_string()),
//!     year: Some("2015".to_string()),
//!     ..Default::default()
//! };
//! let overrides = Overrides::new().with(ClaimField::Make, "Toyota");
//!
//! let assembled = RecordAssembler::new().assemble(&overrides, &DecodedAttributes::new(), &matched);
//! assert_eq!(assembled.record.get(ClaimField::Make), Some("Toyota"));
//!
//! let estimator = ValuationEstimator::new(ValuationConfig::default(), FixedClock::new(2025));
//! assert_eq!(estimator.estimate(assembled.record.get(ClaimField::Year)), Some(14_519));
//! ```

#![warn(missing_docs)]

mod assembler;
mod clock;
mod config;
mod salvage;
mod valuation;

pub use assembler::{AssembledRecord, RecordAssembler};
pub use clock::{FixedClock, SystemClock};
pub use config::ValuationConfig;
pub use salvage::{generate_bids, SALVAGE_VENDORS};
pub use valuation::ValuationEstimator;
