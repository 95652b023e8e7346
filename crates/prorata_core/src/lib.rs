//! Core domain logic for Prorata, income-proportional expense sharing.
//! This crate is the single source of truth for allocation and storage rules.

pub mod allocation;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod storage;

pub use allocation::{
    can_allocate, compute as compute_allocation, format_euros, round_to_cents, total_income,
    AllocatedEntry, Allocation, AllocationError, Breakdown, OwedTotal, ParticipantShare,
};
pub use config::{log_dir_from_env, StorageConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::expense::{ExpenseEntry, ExpenseRejection, ExpenseValidationError};
pub use model::participant::{default_participants, Participant, ParticipantValidationError};
pub use repo::expense_repo::{CsvExpenseRepository, ExpenseRepository};
pub use repo::participant_repo::{JsonParticipantRepository, ParticipantRepository};
pub use repo::{RepoError, RepoResult};
pub use service::ledger_service::{AppendOutcome, ExpenseLedger};
pub use service::participant_service::ParticipantStore;
pub use service::{ServiceError, ServiceResult};
pub use session::{FileSession, Session};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
