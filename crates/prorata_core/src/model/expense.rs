//! Expense entry domain model.
//!
//! # Responsibility
//! - Define one row of the shared expense ledger.
//! - Own the quick-add gate and the amount rule for edited rows.
//!
//! # Invariants
//! - `amount` is finite and `>= 0` for every persisted row.
//! - Entries created through quick-add have `amount > 0` and a non-blank
//!   description.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `strftime` pattern of the creation timestamp (`day-month hour:minute`).
pub const ENTRY_DATE_FORMAT: &str = "%d-%m %H:%M";

/// One shared expense.
///
/// Field names match the tabular record columns `Date`, `Description`,
/// `Montant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Creation timestamp; free text once the row has been edited.
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Montant")]
    pub amount: f64,
}

impl ExpenseEntry {
    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
        }
    }

    /// Builds a quick-add entry stamped with `now`.
    ///
    /// Returns the rejection reason instead of an entry when the quick-add
    /// gate refuses the input.
    pub fn quick_add(
        description: &str,
        amount: f64,
        now: NaiveDateTime,
    ) -> Result<Self, ExpenseRejection> {
        if description.trim().is_empty() {
            return Err(ExpenseRejection::EmptyDescription);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExpenseRejection::NonPositiveAmount);
        }
        Ok(Self::new(
            format_entry_date(now),
            description.to_string(),
            amount,
        ))
    }

    /// Validates the amount rule shared by every persisted row.
    ///
    /// Text fields stay free-form so the direct-edit surface can blank them.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }
        if self.amount < 0.0 {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

/// Formats a timestamp the way new ledger rows are stamped.
pub fn format_entry_date(at: NaiveDateTime) -> String {
    at.format(ENTRY_DATE_FORMAT).to_string()
}

/// Why quick-add refused an expense. Not an error: nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseRejection {
    EmptyDescription,
    NonPositiveAmount,
}

impl Display for ExpenseRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description is required"),
            Self::NonPositiveAmount => write!(f, "amount must be greater than zero"),
        }
    }
}

/// Invalid amount found in a row about to be persisted or just loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    NegativeAmount(f64),
    NonFiniteAmount,
}

impl Display for ExpenseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount(value) => write!(f, "amount must be >= 0, got {value}"),
            Self::NonFiniteAmount => write!(f, "amount must be a finite number"),
        }
    }
}

impl Error for ExpenseValidationError {}
