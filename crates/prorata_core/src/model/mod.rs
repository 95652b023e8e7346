//! Domain model for income-proportional expense sharing.
//!
//! # Responsibility
//! - Define the two persisted record shapes: participants and expenses.
//! - Hold the value-level invariants both records must satisfy.
//!
//! # Invariants
//! - Participant incomes are finite and non-negative.
//! - Expense amounts are finite and non-negative.

pub mod expense;
pub mod participant;
