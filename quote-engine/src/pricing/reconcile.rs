//! Pricing mode reconciliation
//!
//! Combines the discounted subtotal with hardware and installation into the
//! standard net total, then resolves the authoritative net/VAT/gross triple
//! under the active pricing mode. A negotiated price wins over a manual
//! gross override, which wins over the standard computation; the
//! reverse-charge flag never changes the numbers, only which of net/gross
//! the deposit allocation is based on.

use crate::models::PricingMode;
use crate::money::to_decimal;
use rust_decimal::Decimal;

/// Fixed VAT rate, percent
pub const VAT_RATE_PERCENT: Decimal = Decimal::from_parts(23, 0, 0, false, 0);

/// Gross = net × 1.23
pub const VAT_GROSS_FACTOR: Decimal = Decimal::from_parts(123, 0, 0, false, 2);

/// Authoritative totals resolved from the active pricing mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTotals {
    /// Price before VAT
    pub net: Decimal,
    /// VAT amount
    pub vat: Decimal,
    /// Price including VAT
    pub gross: Decimal,
    /// Base for deposit percentages: gross, or net under reverse charge
    /// when no negotiated price is active
    pub effective_base: Decimal,
}

/// Resolve net/VAT/gross and the deposit base
pub fn resolve_pricing(
    after_discount: Decimal,
    hardware_total: Decimal,
    installation_total: Decimal,
    mode: &PricingMode,
    reverse_charge: bool,
) -> ResolvedTotals {
    let net_standard = after_discount + hardware_total + installation_total;
    let gross_standard = net_standard * VAT_GROSS_FACTOR;

    let (net, vat, gross) = match *mode {
        PricingMode::Negotiated { gross } => {
            // A still-unset negotiated value is seeded with the standard gross
            let gross = gross.map(to_decimal).unwrap_or(gross_standard);
            back_compute(gross)
        }
        PricingMode::ManualGross { gross } => back_compute(to_decimal(gross)),
        PricingMode::Standard => {
            let vat = net_standard * VAT_RATE_PERCENT / Decimal::ONE_HUNDRED;
            (net_standard, vat, gross_standard)
        }
    };

    // Under a negotiated price deposits always use the negotiated gross,
    // even when reverse charge is set
    let effective_base = if reverse_charge && !matches!(mode, PricingMode::Negotiated { .. }) {
        net
    } else {
        gross
    };

    ResolvedTotals {
        net,
        vat,
        gross,
        effective_base,
    }
}

/// Back-compute net and VAT from a fixed gross total
fn back_compute(gross: Decimal) -> (Decimal, Decimal, Decimal) {
    let net = gross / VAT_GROSS_FACTOR;
    let vat = gross - net;
    (net, vat, gross)
}
