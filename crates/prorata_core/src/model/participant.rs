//! Participant domain model.
//!
//! # Responsibility
//! - Define the person record whose income weights every expense split.
//! - Provide the built-in defaults used for new and first-run participants.
//!
//! # Invariants
//! - `income` is finite and `>= 0`.
//! - `name` is a display label only; duplicates are allowed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name given to a participant appended through `ParticipantStore::add`.
pub const NEW_PARTICIPANT_NAME: &str = "Nouveau";
/// Income given to a participant appended through `ParticipantStore::add`.
pub const NEW_PARTICIPANT_INCOME: f64 = 1500.0;

/// One person sharing the expenses.
///
/// Serialized as `{"name": .., "income": ..}`. Records written by older
/// builds used `nom`/`salaire` and are still accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Display label.
    #[serde(alias = "nom")]
    pub name: String,
    /// Declared income; the participant's weight in every split.
    #[serde(alias = "salaire")]
    pub income: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, income: f64) -> Self {
        Self {
            name: name.into(),
            income,
        }
    }

    /// Validates value-level invariants before persistence.
    pub fn validate(&self) -> Result<(), ParticipantValidationError> {
        validate_income(self.income)
    }
}

impl Default for Participant {
    fn default() -> Self {
        Self::new(NEW_PARTICIPANT_NAME, NEW_PARTICIPANT_INCOME)
    }
}

/// Participant list used when no participants record exists yet.
pub fn default_participants() -> Vec<Participant> {
    vec![
        Participant::new("Personne A", 2000.0),
        Participant::new("Personne B", 3000.0),
    ]
}

/// Checks that an income value can be used as a split weight.
pub fn validate_income(income: f64) -> Result<(), ParticipantValidationError> {
    if !income.is_finite() {
        return Err(ParticipantValidationError::NonFiniteIncome);
    }
    if income < 0.0 {
        return Err(ParticipantValidationError::NegativeIncome(income));
    }
    Ok(())
}

/// Validation error for participant values.
#[derive(Debug, Clone, PartialEq)]
pub enum ParticipantValidationError {
    NegativeIncome(f64),
    NonFiniteIncome,
}

impl Display for ParticipantValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeIncome(value) => write!(f, "income must be >= 0, got {value}"),
            Self::NonFiniteIncome => write!(f, "income must be a finite number"),
        }
    }
}

impl Error for ParticipantValidationError {}
