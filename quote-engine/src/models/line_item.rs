use serde::{Deserialize, Serialize};

/// A single priced row: quantity × unit price
///
/// Quantity and price may be any finite number, including zero or negative
/// (used for manual corrections). Non-finite values coerce to zero during
/// aggregation; any stored line total is recomputed, never trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LineItem {
    /// Row ID (caller-assigned)
    pub id: i64,
    /// Quantity
    pub quantity: f64,
    /// Unit price
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(id: i64, quantity: f64, unit_price: f64) -> Self {
        Self {
            id,
            quantity,
            unit_price,
        }
    }
}

/// One priced pair inside a composite row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceComponent {
    /// Quantity
    pub quantity: f64,
    /// Unit price
    pub unit_price: f64,
}

impl PriceComponent {
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity,
            unit_price,
        }
    }
}

/// A row bundling several priced sub-components (door + frame + trim)
///
/// Each component contributes its own quantity × unit price pair; the row's
/// total is the sum of all component totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompositeLineItem {
    /// Row ID (caller-assigned)
    pub id: i64,
    /// Priced sub-components of this row
    pub components: Vec<PriceComponent>,
}

impl CompositeLineItem {
    pub fn new(id: i64, components: Vec<PriceComponent>) -> Self {
        Self { id, components }
    }
}
