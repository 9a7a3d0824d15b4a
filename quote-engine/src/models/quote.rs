use super::line_item::{CompositeLineItem, LineItem};
use serde::{Deserialize, Serialize};

/// Discount configuration for a quote
///
/// Percentage and fixed discounts are independently toggleable and additive
/// when both are enabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DiscountSettings {
    /// Percentage discount on products + surcharges
    pub percent: f64,
    /// Whether the percentage discount is applied
    #[serde(default)]
    pub percent_enabled: bool,
    /// Fixed-amount discount
    pub fixed: f64,
    /// Whether the fixed-amount discount is applied
    #[serde(default)]
    pub fixed_enabled: bool,
}

/// Mutually exclusive pricing modes
///
/// The variant order documents the resolution precedence: a negotiated
/// price always wins over a manual gross override, which wins over the
/// standard computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    /// Net/VAT/gross computed from the category subtotals
    #[default]
    Standard,
    /// Gross total fixed by hand; net and VAT are back-computed
    ManualGross { gross: f64 },
    /// Manually agreed final gross price; `None` means still unset and is
    /// seeded with the standard gross
    Negotiated { gross: Option<f64> },
}

/// Input for one quote category group with single-price rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QuoteInputs {
    /// Product rows
    pub products: Vec<LineItem>,
    /// Surcharge rows
    pub surcharges: Vec<LineItem>,
    /// Hardware rows (not subject to discount)
    pub hardware: Vec<LineItem>,
    /// Installation rows (not subject to discount)
    pub installation: Vec<LineItem>,
    /// Discount configuration
    #[serde(default)]
    pub discount: DiscountSettings,
    /// Active pricing mode
    #[serde(default)]
    pub pricing_mode: PricingMode,
    /// Reverse-charge VAT regime: deposits are based on the net total
    /// instead of the gross total (unless a negotiated price is active)
    #[serde(default)]
    pub reverse_charge: bool,
}

/// Input for the door category, whose product rows bundle several priced
/// sub-components (door + frame + trim)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DoorQuoteInputs {
    /// Product rows with multiple priced pairs each
    pub products: Vec<CompositeLineItem>,
    /// Surcharge rows
    pub surcharges: Vec<LineItem>,
    /// Hardware rows (not subject to discount)
    pub hardware: Vec<LineItem>,
    /// Installation rows (not subject to discount)
    pub installation: Vec<LineItem>,
    /// Discount configuration
    #[serde(default)]
    pub discount: DiscountSettings,
    /// Active pricing mode
    #[serde(default)]
    pub pricing_mode: PricingMode,
    /// Reverse-charge VAT regime
    #[serde(default)]
    pub reverse_charge: bool,
}

/// Computed quote totals (output only, never persisted)
///
/// All values are derived; recomputing from the same inputs always yields
/// the same totals. Monetary values are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Totals {
    /// Sum of product rows
    pub products_total: f64,
    /// Sum of surcharge rows
    pub surcharges_total: f64,
    /// products_total + surcharges_total
    pub subtotal: f64,
    /// Combined percentage + fixed discount amount
    pub discount_amount: f64,
    /// subtotal − discount_amount (may be negative, not clamped)
    pub after_discount: f64,
    /// Sum of hardware rows
    pub hardware_total: f64,
    /// Sum of installation rows
    pub installation_total: f64,
    /// Price before VAT
    pub net_total: f64,
    /// VAT amount at the fixed 23% rate
    pub vat_amount: f64,
    /// Price including VAT
    pub gross_total: f64,
    /// The total deposit percentages are computed against (gross, or net
    /// under reverse charge without a negotiated price)
    pub effective_base: f64,
}

/// Reduced totals for the simple no-discount category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct VatTriple {
    /// Price before VAT
    pub net_total: f64,
    /// VAT amount at the fixed 23% rate
    pub vat_amount: f64,
    /// Price including VAT
    pub gross_total: f64,
}
