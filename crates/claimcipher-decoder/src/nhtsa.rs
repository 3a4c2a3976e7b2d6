//! NHTSA vPIC Decoder Implementation
//!
//! Decodes VINs with the free NHTSA vPIC web API
//! (`DecodeVinValues`), which answers with one flat record per VIN.
//!
//! # Features
//!
//! - Blocking HTTP with a configurable timeout
//! - Retry with linear backoff on transport and server errors
//! - Blank attributes dropped from the result
//!
//! # Examples
//!
//! ```no_run
//! use claimcipher_decoder::{DecoderConfig, NhtsaDecoder};
//! use claimcipher_domain::traits::IdentifierDecoder;
//!
//! let decoder = NhtsaDecoder::new(DecoderConfig::default()).unwrap();
//! let attributes = decoder.decode("1HGCM82633A004352").unwrap();
//! println!("{:?}", attributes.basic_attributes());
//! ```

use crate::config::DecoderConfig;
use crate::{check_vin, DecoderError};
use claimcipher_domain::traits::IdentifierDecoder;
use claimcipher_domain::DecodedAttributes;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Decoder backed by the NHTSA vPIC API
pub struct NhtsaDecoder {
    endpoint: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
}

/// Response envelope of `DecodeVinValues`
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DecodeVinValuesResponse {
    results: Vec<HashMap<String, Value>>,
}

impl NhtsaDecoder {
    /// Create a new decoder
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: DecoderConfig) -> Result<Self, DecoderError> {
        config.validate().map_err(DecoderError::Config)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DecoderError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            client,
            max_retries: config.max_retries,
        })
    }

    /// Request URL for a VIN
    fn url(&self, vin: &str) -> String {
        format!("{}/DecodeVinValues/{}?format=json", self.endpoint, vin)
    }

    fn fetch(&self, url: &str) -> Result<String, DecoderError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.get(url).send() {
                Ok(response) if response.status().is_success() => {
                    return response.text().map_err(|e| {
                        DecoderError::InvalidResponse(format!("Failed to read body: {}", e))
                    });
                }
                Ok(response) if response.status().is_client_error() => {
                    return Err(DecoderError::Communication(format!(
                        "HTTP {}",
                        response.status()
                    )));
                }
                Ok(response) => {
                    last_error = Some(DecoderError::Communication(format!(
                        "HTTP {}",
                        response.status()
                    )));
                }
                Err(e) => {
                    last_error = Some(DecoderError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                warn!("Decode attempt {} failed, retrying", attempts);
                thread::sleep(Duration::from_millis(500 * u64::from(attempts)));
            }
        }

        Err(last_error
            .unwrap_or_else(|| DecoderError::Communication("Max retries exceeded".to_string())))
    }
}

impl IdentifierDecoder for NhtsaDecoder {
    type Error = DecoderError;

    fn decode(&self, vin: &str) -> Result<DecodedAttributes, Self::Error> {
        let vin = check_vin(vin)?;
        let body = self.fetch(&self.url(vin))?;
        let attributes = parse_decode_response(&body)?;

        debug!("Decoded {} attribute(s) for {}", attributes.len(), vin);
        Ok(attributes)
    }
}

/// Flatten a `DecodeVinValues` JSON body into attributes
///
/// Only string values are kept, and blank ones are dropped, so a VIN the API
/// cannot decode yields an empty map rather than a map full of blanks.
pub fn parse_decode_response(body: &str) -> Result<DecodedAttributes, DecoderError> {
    let response: DecodeVinValuesResponse = serde_json::from_str(body)
        .map_err(|e| DecoderError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    let Some(first) = response.results.into_iter().next() else {
        return Ok(DecodedAttributes::new());
    };

    Ok(first
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(s) => Some((name, s)),
            _ => None,
        })
        .filter(|(name, _)| !is_status_attribute(name))
        .collect())
}

/// vPIC status bookkeeping that is not a vehicle attribute
fn is_status_attribute(name: &str) -> bool {
    matches!(
        name,
        "ErrorCode" | "ErrorText" | "AdditionalErrorText" | "SuggestedVIN" | "VIN"
    )
}
