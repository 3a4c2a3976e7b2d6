//! Placeholder salvage bids

use claimcipher_domain::SalvageBid;

/// Vendors and the share of the reference value each one bids
pub const SALVAGE_VENDORS: [(&str, f64); 3] = [
    ("SellMax", 0.45),
    ("Cash Auto Salvage", 0.40),
    ("Peddle", 0.42),
];

/// Generate one bid per vendor, in vendor order
///
/// No reference value means no bids.
pub fn generate_bids(reference_value: Option<u64>) -> Vec<SalvageBid> {
    let Some(value) = reference_value else {
        return Vec::new();
    };

    SALVAGE_VENDORS
        .iter()
        .map(|(vendor, share)| SalvageBid::new(*vendor, (value as f64 * share).round() as u64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reference_value_no_bids() {
        assert!(generate_bids(None).is_empty());
    }

    #[test]
    fn test_bids_for_reference_value() {
        let bids = generate_bids(Some(14_519));
        let amounts: Vec<(&str, u64)> = bids.iter().map(|b| (b.vendor.as_str(), b.amount)).collect();
        assert_eq!(
            amounts,
            vec![("SellMax", 6_534), ("Cash Auto Salvage", 5_808), ("Peddle", 6_098)]
        );
    }

    #[test]
    fn test_zero_reference_value() {
        let bids = generate_bids(Some(0));
        assert_eq!(bids.len(), 3);
        assert!(bids.iter().all(|b| b.amount == 0));
    }

    #[test]
    fn test_bids_are_deterministic() {
        assert_eq!(generate_bids(Some(27_900)), generate_bids(Some(27_900)));
    }
}
