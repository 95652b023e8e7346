//! Repository layer over the two durable records.
//!
//! # Responsibility
//! - Define record-oriented load/save contracts for participants and
//!   expenses.
//! - Own the on-disk encodings (JSON participants, CSV ledger).
//!
//! # Invariants
//! - Write paths validate every row before encoding.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::expense::ExpenseValidationError;
use crate::model::participant::ParticipantValidationError;
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod expense_repo;
pub mod participant_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    /// The record exists but cannot be decoded or holds invalid values.
    StorageRead { path: PathBuf, detail: String },
    /// Encoding a record before writing it failed.
    Encode { path: PathBuf, detail: String },
    InvalidParticipant {
        index: usize,
        source: ParticipantValidationError,
    },
    InvalidExpense {
        row: usize,
        source: ExpenseValidationError,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::StorageRead { path, detail } => {
                write!(f, "unreadable record `{}`: {detail}", path.display())
            }
            Self::Encode { path, detail } => {
                write!(f, "failed to encode record `{}`: {detail}", path.display())
            }
            Self::InvalidParticipant { index, source } => {
                write!(f, "invalid participant at index {index}: {source}")
            }
            Self::InvalidExpense { row, source } => {
                write!(f, "invalid expense at row {row}: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidParticipant { source, .. } => Some(source),
            Self::InvalidExpense { source, .. } => Some(source),
            Self::StorageRead { .. } | Self::Encode { .. } => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}
