//! Claim Cipher VIN Decoder Layer
//!
//! Implementations of the `IdentifierDecoder` trait from `claimcipher-domain`.
//!
//! # Decoders
//!
//! - `MockDecoder`: Deterministic, offline decoder for testing
//! - `NhtsaDecoder`: NHTSA vPIC web API integration
//!
//! A failed decode never stops a claim from being processed; callers log the
//! error and carry on with matched and user-supplied values.
//!
//! # Examples
//!
//! ```
//! use claimcipher_decoder::MockDecoder;
//! use claimcipher_domain::traits::IdentifierDecoder;
//!
//! let mut decoder = MockDecoder::new();
//! decoder.add_vehicle("1HGCM82633A004352", "2003", "Honda", "Accord");
//!
//! let attributes = decoder.decode("1HGCM82633A004352").unwrap();
//! assert_eq!(attributes.make(), Some("Honda"));
//! assert!(decoder.decode("2T1BURHE0JC123456").unwrap().is_empty());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod nhtsa;

use claimcipher_domain::decoded::{MAKE, MODEL, MODEL_YEAR};
use claimcipher_domain::traits::IdentifierDecoder;
use claimcipher_domain::DecodedAttributes;
use std::cell::Cell;
use std::collections::HashMap;
use thiserror::Error;

pub use config::DecoderConfig;
pub use nhtsa::NhtsaDecoder;

/// Errors that can occur while decoding a VIN
#[derive(Error, Debug)]
pub enum DecoderError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The VIN is not 17 characters long
    #[error("Invalid VIN '{0}': expected 17 characters")]
    InvalidVin(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Check the VIN shape before spending a request on it
pub(crate) fn check_vin(vin: &str) -> Result<&str, DecoderError> {
    let vin = vin.trim();
    if vin.chars().count() != 17 || !vin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DecoderError::InvalidVin(vin.to_string()));
    }
    Ok(vin)
}

/// Offline decoder for deterministic tests
///
/// Unknown VINs decode to an empty attribute map, the same answer the vPIC
/// API gives for a VIN it does not recognise.
#[derive(Debug, Default)]
pub struct MockDecoder {
    vehicles: HashMap<String, DecodedAttributes>,
    failing: Vec<String>,
    call_count: Cell<usize>,
}

impl MockDecoder {
    /// Create a decoder that knows no vehicles
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the year, make and model for a VIN
    pub fn add_vehicle(
        &mut self,
        vin: impl Into<String>,
        year: &str,
        make: &str,
        model: &str,
    ) {
        let attributes = [(MODEL_YEAR, year), (MAKE, make), (MODEL, model)]
            .into_iter()
            .collect();
        self.vehicles.insert(vin.into(), attributes);
    }

    /// Register an arbitrary attribute map for a VIN
    pub fn add_attributes(&mut self, vin: impl Into<String>, attributes: DecodedAttributes) {
        self.vehicles.insert(vin.into(), attributes);
    }

    /// Configure a VIN whose decode fails with a communication error
    pub fn add_error(&mut self, vin: impl Into<String>) {
        self.failing.push(vin.into());
    }

    /// Get the number of times decode was called
    pub fn call_count(&self) -> usize {
        self.call_count.get()
    }
}

impl IdentifierDecoder for MockDecoder {
    type Error = DecoderError;

    fn decode(&self, vin: &str) -> Result<DecodedAttributes, Self::Error> {
        self.call_count.set(self.call_count.get() + 1);

        let vin = check_vin(vin)?;
        if self.failing.iter().any(|v| v == vin) {
            return Err(DecoderError::Communication("Mock error".to_string()));
        }

        Ok(self.vehicles.get(vin).cloned().unwrap_or_default())
    }
}
