//! Line-item aggregation
//!
//! Reduces rows to category subtotals. No row can fail the aggregation:
//! non-finite quantities or prices coerce to zero before multiplying.

use crate::models::{CompositeLineItem, LineItem};
use crate::money::to_decimal;
use rust_decimal::Decimal;

/// Sum of `quantity × unit_price` across all rows
pub fn sum_line_items(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .map(|item| to_decimal(item.quantity) * to_decimal(item.unit_price))
        .sum()
}

/// Sum across composite rows, each contributing all of its priced pairs
pub fn sum_composite_items(items: &[CompositeLineItem]) -> Decimal {
    items
        .iter()
        .flat_map(|item| &item.components)
        .map(|part| to_decimal(part.quantity) * to_decimal(part.unit_price))
        .sum()
}
