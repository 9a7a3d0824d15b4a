//! Discount resolution
//!
//! A percentage discount and a fixed-amount discount, independently
//! toggleable and additive when both are enabled. The discounted amount is
//! not clamped: discounts exceeding the subtotal produce a negative
//! `after_discount`, surfaced as-is for the caller to flag.

use crate::models::DiscountSettings;
use crate::money::to_decimal;
use rust_decimal::Decimal;

/// Breakdown of an applied discount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountBreakdown {
    /// Amount contributed by the percentage discount
    pub percent_amount: Decimal,
    /// Amount contributed by the fixed discount
    pub fixed_amount: Decimal,
    /// percent_amount + fixed_amount
    pub discount_amount: Decimal,
    /// subtotal − discount_amount
    pub after_discount: Decimal,
}

/// Apply the enabled discounts to the products + surcharges subtotal
pub fn resolve_discount(subtotal: Decimal, settings: &DiscountSettings) -> DiscountBreakdown {
    let percent_amount = if settings.percent_enabled {
        subtotal * to_decimal(settings.percent) / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let fixed_amount = if settings.fixed_enabled {
        to_decimal(settings.fixed)
    } else {
        Decimal::ZERO
    };
    let discount_amount = percent_amount + fixed_amount;

    DiscountBreakdown {
        percent_amount,
        fixed_amount,
        discount_amount,
        after_discount: subtotal - discount_amount,
    }
}
