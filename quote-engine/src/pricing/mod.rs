//! Pricing pipeline: aggregation → discount → mode reconciliation → deposits
//!
//! Every stage is a pure function over `Decimal` values; `f64` only appears
//! at the API boundary. The [`crate::engine::QuoteEngine`] wraps these with
//! memoization.

mod aggregate;
mod allocator;
mod discount;
mod reconcile;

pub use aggregate::{sum_composite_items, sum_line_items};
pub use allocator::allocate_deposits;
pub use discount::{resolve_discount, DiscountBreakdown};
pub use reconcile::{resolve_pricing, ResolvedTotals, VAT_GROSS_FACTOR, VAT_RATE_PERCENT};

use crate::models::{
    DiscountSettings, DoorQuoteInputs, LineItem, PricingMode, QuoteInputs, Totals, VatTriple,
};
use crate::money::to_f64;
use rust_decimal::Decimal;

/// Compute full quote totals for single-price-per-row categories
pub fn quote_totals(inputs: &QuoteInputs) -> Totals {
    totals_from_parts(
        sum_line_items(&inputs.products),
        sum_line_items(&inputs.surcharges),
        sum_line_items(&inputs.hardware),
        sum_line_items(&inputs.installation),
        &inputs.discount,
        &inputs.pricing_mode,
        inputs.reverse_charge,
    )
}

/// Compute full quote totals for the door category (multi-component rows)
pub fn door_quote_totals(inputs: &DoorQuoteInputs) -> Totals {
    totals_from_parts(
        sum_composite_items(&inputs.products),
        sum_line_items(&inputs.surcharges),
        sum_line_items(&inputs.hardware),
        sum_line_items(&inputs.installation),
        &inputs.discount,
        &inputs.pricing_mode,
        inputs.reverse_charge,
    )
}

/// Reduced net/VAT/gross triple for the simple no-discount category
pub fn accessory_triple(items: &[LineItem]) -> VatTriple {
    let net = sum_line_items(items);
    let vat = net * VAT_RATE_PERCENT / Decimal::ONE_HUNDRED;
    let gross = net * VAT_GROSS_FACTOR;
    VatTriple {
        net_total: to_f64(net),
        vat_amount: to_f64(vat),
        gross_total: to_f64(gross),
    }
}

fn totals_from_parts(
    products_total: Decimal,
    surcharges_total: Decimal,
    hardware_total: Decimal,
    installation_total: Decimal,
    discount: &DiscountSettings,
    mode: &PricingMode,
    reverse_charge: bool,
) -> Totals {
    let subtotal = products_total + surcharges_total;
    let breakdown = resolve_discount(subtotal, discount);
    let resolved = resolve_pricing(
        breakdown.after_discount,
        hardware_total,
        installation_total,
        mode,
        reverse_charge,
    );

    Totals {
        products_total: to_f64(products_total),
        surcharges_total: to_f64(surcharges_total),
        subtotal: to_f64(subtotal),
        discount_amount: to_f64(breakdown.discount_amount),
        after_discount: to_f64(breakdown.after_discount),
        hardware_total: to_f64(hardware_total),
        installation_total: to_f64(installation_total),
        net_total: to_f64(resolved.net),
        vat_amount: to_f64(resolved.vat),
        gross_total: to_f64(resolved.gross),
        effective_base: to_f64(resolved.effective_base),
    }
}
