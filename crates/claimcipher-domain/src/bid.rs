//! Salvage bid value type

/// A synthetic salvage bid from a named vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalvageBid {
    /// Vendor name
    pub vendor: String,

    /// Bid in whole dollars
    pub amount: u64,
}

impl SalvageBid {
    /// Create a new bid
    pub fn new(vendor: impl Into<String>, amount: u64) -> Self {
        Self {
            vendor: vendor.into(),
            amount,
        }
    }
}
