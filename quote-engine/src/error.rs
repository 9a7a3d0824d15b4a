//! Error types for the quote engine
//!
//! The pricing pipeline itself never fails: malformed numeric input is
//! coerced to zero (see [`crate::money::to_decimal`]). Errors only arise
//! from deposit-plan editing operations addressing a deposit that does not
//! exist.

use thiserror::Error;

/// Unified error type for the engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// A deposit-plan edit addressed an unknown deposit ID
    #[error("Deposit not found: {0}")]
    DepositNotFound(i64),
}
