//! Quote pricing & payment allocation engine
//!
//! Turns priced line items into an authoritative net/VAT/gross total under
//! mutually exclusive pricing modes (standard, manual gross override,
//! negotiated price, with reverse charge orthogonal), then splits that
//! total across a configurable list of payment deposits with rounding and
//! sticky manual overrides.
//!
//! The engine is pure, synchronous computation: no I/O, no side effects.
//! The only shared state is a bounded, TTL-based memoization cache owned by
//! [`QuoteEngine`]. All monetary arithmetic uses `rust_decimal`; `f64`
//! appears only at the API boundary, where non-finite values coerce to zero
//! so an interactive caller can always render a total mid-edit.

pub mod cache;
pub mod engine;
pub mod error;
pub mod models;
pub mod money;
pub mod pricing;
pub mod util;

// Re-exports
pub use cache::{CacheKey, MemoCache};
pub use engine::QuoteEngine;
pub use error::QuoteError;
pub use models::{
    CompositeLineItem, Deposit, DepositAmount, DepositPlan, DiscountSettings, DoorQuoteInputs,
    LineItem, PriceComponent, PricingMode, QuoteInputs, Totals, VatTriple,
};
pub use pricing::allocate_deposits;
