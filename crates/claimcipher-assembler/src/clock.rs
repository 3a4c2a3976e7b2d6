//! Calendar year sources for valuation

use chrono::Datelike;
use claimcipher_domain::traits::Clock;

/// Reads the year from the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    /// Create a clock pinned to `year`
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock::new(2025).current_year(), 2025);
    }

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
