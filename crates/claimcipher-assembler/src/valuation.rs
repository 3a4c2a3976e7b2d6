//! Depreciated reference value

use crate::config::ValuationConfig;
use claimcipher_domain::traits::Clock;
use tracing::debug;

/// Earliest model year that gets a valuation
pub const MIN_MODEL_YEAR: i32 = 1900;

/// Maps a model year to a depreciated reference value
///
/// `value = round(base_value * retention_rate ^ age)` where `age` is the
/// current year minus the model year. Years that do not parse, lie in the
/// future or precede 1900 have no value.
#[derive(Debug, Clone)]
pub struct ValuationEstimator<C: Clock> {
    config: ValuationConfig,
    clock: C,
}

impl<C: Clock> ValuationEstimator<C> {
    /// Create an estimator reading the year from `clock`
    pub fn new(config: ValuationConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Estimate the reference value for a model year
    pub fn estimate(&self, model_year: Option<&str>) -> Option<u64> {
        let year: i32 = model_year?.trim().parse().ok()?;
        let current = self.clock.current_year();

        if year > current || year < MIN_MODEL_YEAR {
            debug!("No valuation for model year {} (current {})", year, current);
            return None;
        }

        let age = current - year;
        let value = self.config.base_value * self.config.retention_rate.powi(age);
        Some(value.round() as u64)
    }
}
