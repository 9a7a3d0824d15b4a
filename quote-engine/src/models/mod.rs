//! Data model for the quote engine
//!
//! Inputs (line items, discount settings, pricing mode, deposits) are owned
//! and mutated by the caller; the engine never mutates them and returns new
//! output structures on every call.

mod deposit;
mod line_item;
mod quote;

pub use deposit::{Deposit, DepositAmount, DepositPlan};
pub use line_item::{CompositeLineItem, LineItem, PriceComponent};
pub use quote::{DiscountSettings, DoorQuoteInputs, PricingMode, QuoteInputs, Totals, VatTriple};
