//! Expense ledger use-case service.
//!
//! # Responsibility
//! - Quick-add one expense behind the form validation gate.
//! - Replace the whole ledger from the direct-edit surface.
//! - Reset the ledger by deleting its record.
//!
//! # Invariants
//! - Every write reads the current record, edits it in memory and rewrites
//!   it whole.
//! - A rejected quick-add and an unchanged replacement write nothing.

use crate::model::expense::{ExpenseEntry, ExpenseRejection};
use crate::repo::expense_repo::ExpenseRepository;
use crate::service::{ServiceError, ServiceResult};
use chrono::{Local, NaiveDateTime};
use log::info;

/// Result of a quick-add attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppendOutcome {
    /// The entry was stamped, appended and persisted.
    Appended(ExpenseEntry),
    /// The form gate refused the input; the ledger is unchanged.
    Rejected(ExpenseRejection),
}

impl AppendOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended(_))
    }
}

/// Use-case service over the expense record.
pub struct ExpenseLedger<R: ExpenseRepository> {
    repo: R,
}

impl<R: ExpenseRepository> ExpenseLedger<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the ledger; empty when no record exists.
    pub fn load(&self) -> ServiceResult<Vec<ExpenseEntry>> {
        Ok(self.repo.load_expenses()?.unwrap_or_default())
    }

    /// Appends an expense stamped with the current local time.
    pub fn append(&self, description: &str, amount: f64) -> ServiceResult<AppendOutcome> {
        self.append_at(description, amount, Local::now().naive_local())
    }

    /// Appends an expense stamped with `now`.
    ///
    /// # Contract
    /// - Requires `amount > 0` and a non-blank description; otherwise returns
    ///   `AppendOutcome::Rejected` and performs no I/O.
    pub fn append_at(
        &self,
        description: &str,
        amount: f64,
        now: NaiveDateTime,
    ) -> ServiceResult<AppendOutcome> {
        let entry = match ExpenseEntry::quick_add(description, amount, now) {
            Ok(entry) => entry,
            Err(reason) => {
                info!(
                    "event=expense_add module=service status=rejected reason={:?}",
                    reason
                );
                return Ok(AppendOutcome::Rejected(reason));
            }
        };

        let mut entries = self.load()?;
        entries.push(entry.clone());
        self.repo.save_expenses(&entries)?;
        info!(
            "event=expense_add module=service status=ok count={}",
            entries.len()
        );
        Ok(AppendOutcome::Appended(entry))
    }

    /// Replaces the whole ledger with `entries`.
    ///
    /// Writes only when `entries` differs from the loaded ledger in any
    /// field of any row, or in row count/order. A missing record compares
    /// as an empty ledger. Returns whether it wrote.
    ///
    /// # Errors
    /// - `ServiceError::InvalidExpense` when a row has a negative or
    ///   non-finite amount. Blank text fields are accepted.
    pub fn replace_all(&self, entries: Vec<ExpenseEntry>) -> ServiceResult<bool> {
        for (row, entry) in entries.iter().enumerate() {
            entry
                .validate()
                .map_err(|source| ServiceError::InvalidExpense { row, source })?;
        }

        if self.load()? == entries {
            return Ok(false);
        }

        self.repo.save_expenses(&entries)?;
        info!(
            "event=expense_replace module=service status=ok count={}",
            entries.len()
        );
        Ok(true)
    }

    /// Deletes the ledger record. Returns whether one existed.
    pub fn clear(&self) -> ServiceResult<bool> {
        Ok(self.repo.clear_expenses()?)
    }
}
