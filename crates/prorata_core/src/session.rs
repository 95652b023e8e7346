//! Session facade for the presentation layer.
//!
//! # Responsibility
//! - Own the in-memory participant list across user interactions.
//! - Expose every participant, ledger and allocation operation a UI needs.
//!
//! # Invariants
//! - The participant list mirrors the participants record after every
//!   successful mutation.
//! - Mutations return whether state changed; re-rendering is the caller's
//!   decision.
//! - Expenses are never cached; each read goes to the record.

use crate::allocation::{self, Allocation};
use crate::config::StorageConfig;
use crate::model::expense::ExpenseEntry;
use crate::model::participant::Participant;
use crate::repo::expense_repo::{CsvExpenseRepository, ExpenseRepository};
use crate::repo::participant_repo::{JsonParticipantRepository, ParticipantRepository};
use crate::service::ledger_service::{AppendOutcome, ExpenseLedger};
use crate::service::participant_service::ParticipantStore;
use crate::service::ServiceResult;
use chrono::NaiveDateTime;
use log::info;

/// Session backed by the flat-file records.
pub type FileSession = Session<JsonParticipantRepository, CsvExpenseRepository>;

/// Explicit per-user context passed between interactions.
pub struct Session<P: ParticipantRepository, E: ExpenseRepository> {
    participants: Vec<Participant>,
    participant_store: ParticipantStore<P>,
    ledger: ExpenseLedger<E>,
}

impl FileSession {
    /// Opens a session over the records located by `config`.
    ///
    /// # Errors
    /// - Fails when the participants record exists but is unreadable.
    pub fn open(config: &StorageConfig) -> ServiceResult<Self> {
        info!(
            "event=session_open module=session status=start data_dir={}",
            config.data_dir().display()
        );
        Self::new(
            ParticipantStore::new(JsonParticipantRepository::new(config.participants_path())),
            ExpenseLedger::new(CsvExpenseRepository::new(config.expenses_path())),
        )
    }
}

impl<P: ParticipantRepository, E: ExpenseRepository> Session<P, E> {
    /// Creates a session and loads the participant list once.
    pub fn new(participant_store: ParticipantStore<P>, ledger: ExpenseLedger<E>) -> ServiceResult<Self> {
        let participants = participant_store.load()?;
        info!(
            "event=session_open module=session status=ok participants={}",
            participants.len()
        );
        Ok(Self {
            participants,
            participant_store,
            ledger,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn add_participant(&mut self) -> ServiceResult<bool> {
        self.participant_store.add(&mut self.participants)
    }

    pub fn remove_last_participant(&mut self) -> ServiceResult<bool> {
        self.participant_store.remove_last(&mut self.participants)
    }

    pub fn update_participant(&mut self, index: usize, name: &str, income: f64) -> ServiceResult<bool> {
        self.participant_store
            .update(&mut self.participants, index, name, income)
    }

    /// Sum of incomes, shown as the household total.
    pub fn total_income(&self) -> f64 {
        allocation::total_income(&self.participants)
    }

    pub fn expenses(&self) -> ServiceResult<Vec<ExpenseEntry>> {
        self.ledger.load()
    }

    pub fn add_expense(&self, description: &str, amount: f64) -> ServiceResult<AppendOutcome> {
        self.ledger.append(description, amount)
    }

    /// Same as [`Session::add_expense`] with an explicit timestamp.
    pub fn add_expense_at(
        &self,
        description: &str,
        amount: f64,
        now: NaiveDateTime,
    ) -> ServiceResult<AppendOutcome> {
        self.ledger.append_at(description, amount, now)
    }

    pub fn replace_all_expenses(&self, entries: Vec<ExpenseEntry>) -> ServiceResult<bool> {
        self.ledger.replace_all(entries)
    }

    /// Deletes the expense record entirely.
    pub fn clear_expenses(&self) -> ServiceResult<bool> {
        self.ledger.clear()
    }

    /// Whether [`Session::compute_allocation`] has something to divide by.
    ///
    /// Callers show an empty state instead of computing when this is false.
    pub fn can_allocate(&self) -> bool {
        allocation::can_allocate(&self.participants)
    }

    /// Splits the current ledger across the current participants.
    pub fn compute_allocation(&self, include_breakdown: bool) -> ServiceResult<Allocation> {
        let entries = self.ledger.load()?;
        Ok(allocation::compute(
            &self.participants,
            &entries,
            include_breakdown,
        )?)
    }
}
