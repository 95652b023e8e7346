//! Expense ledger record contract and CSV file implementation.
//!
//! # Responsibility
//! - Load, save and delete the ordered expense ledger as one record.
//!
//! # Invariants
//! - The record is CSV with header `Date,Description,Montant`.
//! - Row order on disk is ledger order.
//! - A record without the three columns is unreadable, even when empty.

use super::{RepoError, RepoResult};
use crate::model::expense::ExpenseEntry;
use crate::storage::{read_record, remove_record, write_record};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Column header of the expense record, in write order.
pub const LEDGER_COLUMNS: [&str; 3] = ["Date", "Description", "Montant"];

/// Repository interface for the expense ledger record.
pub trait ExpenseRepository {
    /// Returns `None` when no record has been written yet.
    fn load_expenses(&self) -> RepoResult<Option<Vec<ExpenseEntry>>>;
    fn save_expenses(&self, entries: &[ExpenseEntry]) -> RepoResult<()>;
    /// Deletes the record. Returns whether one existed.
    fn clear_expenses(&self) -> RepoResult<bool>;
}

/// CSV-file-backed expense repository.
pub struct CsvExpenseRepository {
    path: PathBuf,
}

impl CsvExpenseRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, detail: String) -> RepoError {
        error!("event=expenses_load module=repo status=error error_code=record_unreadable");
        RepoError::StorageRead {
            path: self.path.clone(),
            detail,
        }
    }

    fn encode_error(&self, detail: String) -> RepoError {
        RepoError::Encode {
            path: self.path.clone(),
            detail,
        }
    }
}

impl ExpenseRepository for CsvExpenseRepository {
    fn load_expenses(&self) -> RepoResult<Option<Vec<ExpenseEntry>>> {
        let Some(bytes) = read_record(&self.path)? else {
            return Ok(None);
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());

        let headers = reader
            .headers()
            .map_err(|err| self.unreadable(err.to_string()))?
            .clone();
        for column in LEDGER_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(self.unreadable(format!("missing column `{column}`")));
            }
        }

        let mut entries = Vec::new();
        for (row, record) in reader.deserialize::<ExpenseEntry>().enumerate() {
            let entry = record.map_err(|err| self.unreadable(format!("row {row}: {err}")))?;
            entry
                .validate()
                .map_err(|err| self.unreadable(format!("row {row}: {err}")))?;
            entries.push(entry);
        }

        info!(
            "event=expenses_load module=repo status=ok count={}",
            entries.len()
        );
        Ok(Some(entries))
    }

    fn save_expenses(&self, entries: &[ExpenseEntry]) -> RepoResult<()> {
        for (row, entry) in entries.iter().enumerate() {
            entry
                .validate()
                .map_err(|source| RepoError::InvalidExpense { row, source })?;
        }

        // Header is written by hand so an empty ledger still carries it.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(LEDGER_COLUMNS)
            .map_err(|err| self.encode_error(err.to_string()))?;
        for entry in entries {
            writer
                .serialize(entry)
                .map_err(|err| self.encode_error(err.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| self.encode_error(err.to_string()))?;

        write_record(&self.path, &bytes)?;
        info!(
            "event=expenses_save module=repo status=ok count={}",
            entries.len()
        );
        Ok(())
    }

    fn clear_expenses(&self) -> RepoResult<bool> {
        let removed = remove_record(&self.path)?;
        info!(
            "event=expenses_clear module=repo status=ok removed={}",
            removed
        );
        Ok(removed)
    }
}
