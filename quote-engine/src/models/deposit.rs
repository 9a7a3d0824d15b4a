use crate::error::QuoteError;
use serde::{Deserialize, Serialize};

/// One installment of the payment plan
///
/// A non-null `fixed_amount` is authoritative for the displayed value
/// regardless of `percent`. Setting a new percent clears the fixed amount:
/// a percent edit after a fixed-amount edit means the user wants to go back
/// to percentage-based allocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deposit {
    /// Deposit ID (caller-assigned)
    pub id: i64,
    /// Display label
    pub label: String,
    /// Share of the effective base, in percent
    pub percent: f64,
    /// Manual euro amount overriding the percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_amount: Option<f64>,
}

impl Deposit {
    pub fn new(id: i64, label: impl Into<String>, percent: f64) -> Self {
        Self {
            id,
            label: label.into(),
            percent,
            fixed_amount: None,
        }
    }
}

/// Ordered list of deposits with its editing rules
///
/// Deposits are not required to sum to 100%; each is computed independently
/// against the same base. Structural changes (add/remove) and any change to
/// the effective base invalidate all manual fixed amounts, because a fixed
/// euro amount computed against an old base would silently misallocate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepositPlan {
    /// Deposits in display order
    pub deposits: Vec<Deposit>,
}

impl DepositPlan {
    /// Empty plan
    pub fn new() -> Self {
        Self {
            deposits: Vec::new(),
        }
    }

    /// The default three-deposit 60/30/10 split
    pub fn default_split() -> Self {
        Self {
            deposits: vec![
                Deposit::new(1, "First deposit", 60.0),
                Deposit::new(2, "Second deposit", 30.0),
                Deposit::new(3, "Final payment", 10.0),
            ],
        }
    }

    /// Whether this plan is the untouched default split: exactly three
    /// deposits at 60/30/10 with no manual fixed amounts. Only this shape
    /// gets the round-up-and-remainder treatment during allocation.
    pub fn is_default_split(&self) -> bool {
        self.deposits.len() == 3
            && self.deposits[0].percent == 60.0
            && self.deposits[1].percent == 30.0
            && self.deposits[2].percent == 10.0
            && self.deposits.iter().all(|d| d.fixed_amount.is_none())
    }

    /// Set a deposit's percentage, clearing its fixed amount so the
    /// displayed value tracks the percentage again
    pub fn set_percent(&mut self, id: i64, percent: f64) -> Result<(), QuoteError> {
        let deposit = self.deposit_mut(id)?;
        deposit.percent = percent;
        deposit.fixed_amount = None;
        Ok(())
    }

    /// Set a deposit's manual fixed amount; it stays authoritative until
    /// cleared by a percent edit or a plan/base invalidation
    pub fn set_fixed_amount(&mut self, id: i64, amount: f64) -> Result<(), QuoteError> {
        self.deposit_mut(id)?.fixed_amount = Some(amount);
        Ok(())
    }

    /// Append a deposit; invalidates all fixed amounts
    pub fn add_deposit(&mut self, deposit: Deposit) {
        self.deposits.push(deposit);
        self.clear_fixed_amounts();
    }

    /// Remove a deposit; invalidates all fixed amounts
    pub fn remove_deposit(&mut self, id: i64) -> Result<(), QuoteError> {
        let idx = self
            .deposits
            .iter()
            .position(|d| d.id == id)
            .ok_or(QuoteError::DepositNotFound(id))?;
        self.deposits.remove(idx);
        self.clear_fixed_amounts();
        Ok(())
    }

    /// Clear all manual fixed amounts
    ///
    /// Callers must invoke this whenever the effective base changes (line
    /// item edits, discount/reverse-charge/negotiated-price toggles).
    pub fn clear_fixed_amounts(&mut self) {
        for deposit in &mut self.deposits {
            deposit.fixed_amount = None;
        }
    }

    fn deposit_mut(&mut self, id: i64) -> Result<&mut Deposit, QuoteError> {
        self.deposits
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(QuoteError::DepositNotFound(id))
    }
}

impl Default for DepositPlan {
    fn default() -> Self {
        Self::default_split()
    }
}

/// Displayed amount for one deposit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepositAmount {
    /// ID of the deposit this amount belongs to
    pub deposit_id: i64,
    /// Label snapshot
    pub label: String,
    /// Displayed euro amount
    pub amount: f64,
}
