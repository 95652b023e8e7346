//! Income-proportional allocation entry points.
//!
//! # Responsibility
//! - Split the ledger across participants by income share.
//! - Keep display rounding separate from full-precision accumulation.

pub mod engine;

pub use engine::{
    can_allocate, compute, format_euros, round_to_cents, share_column_label, shares,
    total_income, AllocatedEntry, Allocation, AllocationError, Breakdown, OwedTotal,
    ParticipantShare,
};
