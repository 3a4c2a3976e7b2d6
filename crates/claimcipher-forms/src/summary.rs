//! Plain-text claim summary

use claimcipher_domain::{CanonicalClaimRecord, ClaimField, SalvageBid};

/// Everything the summary reports on
#[derive(Debug, Clone, Copy)]
pub struct ClaimSummaryInput<'a> {
    /// The merged claim record
    pub record: &'a CanonicalClaimRecord,

    /// Reference value of the vehicle, if one could be estimated
    pub valuation: Option<u64>,

    /// Salvage bids, possibly empty
    pub bids: &'a [SalvageBid],

    /// Whether the vehicle is treated as a total loss
    pub total_loss: bool,
}

const NOT_AVAILABLE: &str = "N/A";

/// Build the multi-line summary
///
/// Absent fields print as `N/A`. The valuation line and the bid block are
/// left out when there is nothing to report.
pub fn build_summary(input: &ClaimSummaryInput<'_>) -> String {
    let value = |field| input.record.get(field).unwrap_or(NOT_AVAILABLE);
    let mut lines = vec![
        format!("Claim Number: {}", value(ClaimField::ClaimNumber)),
        format!("Customer Name: {}", value(ClaimField::CustomerName)),
        format!("Adjuster Name: {}", value(ClaimField::AdjusterName)),
        format!(
            "Date of Loss: {} | Inspection Location: {}",
            value(ClaimField::DateOfLoss),
            value(ClaimField::InspectionLocation)
        ),
        format!(
            "Vehicle: {} {} {}",
            value(ClaimField::Year),
            value(ClaimField::Make),
            value(ClaimField::Model)
        ),
        format!("VIN: {}", value(ClaimField::Vin)),
        format!("Mileage: {}", value(ClaimField::Mileage)),
        format!("Damages: {}", value(ClaimField::Damages)),
        format!("Estimated Days to Repair: {}", value(ClaimField::DaysToRepair)),
    ];

    if let Some(valuation) = input.valuation {
        lines.push(format!("Estimated NADA Value: {}", format_dollars(valuation)));
    }

    if !input.bids.is_empty() {
        lines.push("Salvage Bids:".to_string());
        for bid in input.bids {
            lines.push(format!("  • {}: {}", bid.vendor, format_dollars(bid.amount)));
        }
    }

    let conclusion = if input.total_loss {
        "Total Loss"
    } else {
        "Repairable"
    };
    lines.push(format!("Conclusion: {}", conclusion));

    lines.join("\n")
}

/// Whole dollars with thousands separators, e.g. `$14,519`
pub fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}", grouped)
}
