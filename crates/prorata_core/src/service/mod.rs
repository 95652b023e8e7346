//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository calls into the participant and ledger use-cases.
//! - Keep the presentation layer decoupled from record encodings.
//!
//! # Invariants
//! - Mutating operations persist before they return and report whether
//!   anything changed.
//! - Services hold no participant state of their own; the caller's session
//!   owns the in-memory list.

use crate::allocation::AllocationError;
use crate::model::expense::ExpenseValidationError;
use crate::model::participant::ParticipantValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod ledger_service;
pub mod participant_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for participant, ledger and allocation use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure, including unreadable records.
    Repo(RepoError),
    /// No participant at the requested position.
    ParticipantIndexOutOfRange { index: usize, len: usize },
    InvalidParticipant(ParticipantValidationError),
    InvalidExpense {
        row: usize,
        source: ExpenseValidationError,
    },
    /// Allocation requested without participants or without income.
    Allocation(AllocationError),
}

impl ServiceError {
    /// Whether this error reports a record that exists but cannot be read.
    pub fn is_storage_read(&self) -> bool {
        matches!(self, Self::Repo(RepoError::StorageRead { .. }))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::ParticipantIndexOutOfRange { index, len } => {
                write!(f, "participant index {index} out of range (len {len})")
            }
            Self::InvalidParticipant(err) => write!(f, "invalid participant: {err}"),
            Self::InvalidExpense { row, source } => {
                write!(f, "invalid expense at row {row}: {source}")
            }
            Self::Allocation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidParticipant(err) => Some(err),
            Self::InvalidExpense { source, .. } => Some(source),
            Self::Allocation(err) => Some(err),
            Self::ParticipantIndexOutOfRange { .. } => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::InvalidParticipant { source, .. } => Self::InvalidParticipant(source),
            RepoError::InvalidExpense { row, source } => Self::InvalidExpense { row, source },
            other => Self::Repo(other),
        }
    }
}

impl From<AllocationError> for ServiceError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}
