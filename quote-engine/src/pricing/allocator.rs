//! Deposit allocation
//!
//! Each deposit is computed independently against the same effective base:
//! a manual fixed amount is authoritative, otherwise the percentage of the
//! base applies. The untouched default 60/30/10 split additionally rounds
//! the first two amounts up to the next multiple of 10 and assigns the
//! third the exact remainder, so the three displayed amounts always sum to
//! the base.

use crate::models::{DepositAmount, DepositPlan};
use crate::money::{to_decimal, to_f64};
use rust_decimal::Decimal;

/// Compute the displayed amount for every deposit in the plan
pub fn allocate_deposits(effective_base: f64, plan: &DepositPlan) -> Vec<DepositAmount> {
    let base = to_decimal(effective_base);

    if plan.is_default_split() {
        return allocate_default_split(base, plan);
    }

    plan.deposits
        .iter()
        .map(|deposit| {
            let amount = match deposit.fixed_amount {
                Some(fixed) => to_decimal(fixed),
                None => base * to_decimal(deposit.percent) / Decimal::ONE_HUNDRED,
            };
            DepositAmount {
                deposit_id: deposit.id,
                label: deposit.label.clone(),
                amount: to_f64(amount),
            }
        })
        .collect()
}

/// Round-up-and-remainder treatment for the untouched 60/30/10 split
fn allocate_default_split(base: Decimal, plan: &DepositPlan) -> Vec<DepositAmount> {
    let first = ceil_to_ten(base * to_decimal(plan.deposits[0].percent) / Decimal::ONE_HUNDRED);
    let second = ceil_to_ten(base * to_decimal(plan.deposits[1].percent) / Decimal::ONE_HUNDRED);
    // Exact remainder, so the three amounts sum to the base
    let third = base - first - second;

    plan.deposits
        .iter()
        .zip([first, second, third])
        .map(|(deposit, amount)| DepositAmount {
            deposit_id: deposit.id,
            label: deposit.label.clone(),
            amount: to_f64(amount),
        })
        .collect()
}

/// Round up to the nearest multiple of 10
fn ceil_to_ten(value: Decimal) -> Decimal {
    (value / Decimal::TEN).ceil() * Decimal::TEN
}
