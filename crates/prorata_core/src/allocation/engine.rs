//! Proportional allocation engine.
//!
//! # Responsibility
//! - Compute each participant's income share.
//! - Sum every expense times that share into per-participant owed totals.
//! - Optionally produce a per-expense, per-participant breakdown.
//!
//! # Invariants
//! - Shares sum to 1 whenever total income is positive.
//! - Owed totals sum to the ledger total, up to floating-point rounding.
//! - No division happens unless the participant list is non-empty and total
//!   income is positive and finite.
//! - Results keep participant order; duplicate names stay separate rows.

use crate::model::expense::ExpenseEntry;
use crate::model::participant::Participant;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason the allocation cannot be computed. Callers show an empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationError {
    NoParticipants,
    ZeroTotalIncome,
    /// Participant income is negative or not a finite number.
    InvalidIncome { index: usize, income: f64 },
    /// Incomes are each finite but their sum is not.
    IncomeOverflow,
}

impl Display for AllocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoParticipants => write!(f, "allocation needs at least one participant"),
            Self::ZeroTotalIncome => write!(f, "allocation needs a positive total income"),
            Self::InvalidIncome { index, income } => {
                write!(f, "participant {index} has invalid income {income}")
            }
            Self::IncomeOverflow => write!(f, "total income is too large to divide by"),
        }
    }
}

impl Error for AllocationError {}

/// Fraction of every expense a participant is responsible for.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantShare {
    pub name: String,
    pub income: f64,
    /// `income / total_income`, in `[0, 1]`.
    pub share: f64,
}

/// Total a participant owes across the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct OwedTotal {
    pub name: String,
    pub share: f64,
    /// Full precision; round only for display.
    pub owed: f64,
}

/// One ledger row with its amount split per participant.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocatedEntry {
    pub entry: ExpenseEntry,
    /// `entry.amount * share`, one value per participant in list order.
    pub allocations: Vec<f64>,
}

/// Per-expense breakdown in ledger order.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    /// One `Part {name} ({pct}%)` label per participant.
    pub columns: Vec<String>,
    pub rows: Vec<AllocatedEntry>,
}

impl Breakdown {
    /// Rows newest first, the order the ledger view displays them in.
    pub fn latest_first(&self) -> impl Iterator<Item = &AllocatedEntry> {
        self.rows.iter().rev()
    }
}

/// Allocation result.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub total_income: f64,
    /// Sum of all expense amounts.
    pub total_spent: f64,
    /// Owed totals in participant order.
    pub owed: Vec<OwedTotal>,
    /// Present only when requested.
    pub breakdown: Option<Breakdown>,
}

/// Sum of all participant incomes.
pub fn total_income(participants: &[Participant]) -> f64 {
    participants.iter().map(|participant| participant.income).sum()
}

/// Whether [`compute`] would succeed for this participant list.
pub fn can_allocate(participants: &[Participant]) -> bool {
    shares(participants).is_ok()
}

/// Computes each participant's share of total income.
pub fn shares(participants: &[Participant]) -> Result<Vec<ParticipantShare>, AllocationError> {
    if participants.is_empty() {
        return Err(AllocationError::NoParticipants);
    }
    for (index, participant) in participants.iter().enumerate() {
        if !participant.income.is_finite() || participant.income < 0.0 {
            return Err(AllocationError::InvalidIncome {
                index,
                income: participant.income,
            });
        }
    }

    let total = total_income(participants);
    if !total.is_finite() {
        return Err(AllocationError::IncomeOverflow);
    }
    if total <= 0.0 {
        return Err(AllocationError::ZeroTotalIncome);
    }

    Ok(participants
        .iter()
        .map(|participant| ParticipantShare {
            name: participant.name.clone(),
            income: participant.income,
            share: participant.income / total,
        })
        .collect())
}

/// Splits every entry across participants by income share.
///
/// # Errors
/// - `NoParticipants` / `ZeroTotalIncome` when there is nothing to divide by.
/// - `InvalidIncome` when an income is negative or not finite.
/// - `IncomeOverflow` when the incomes sum past `f64::MAX`.
pub fn compute(
    participants: &[Participant],
    entries: &[ExpenseEntry],
    include_breakdown: bool,
) -> Result<Allocation, AllocationError> {
    let shares = shares(participants)?;

    let mut owed = vec![0.0_f64; shares.len()];
    let mut rows = Vec::new();
    for entry in entries {
        let allocations = shares
            .iter()
            .map(|share| entry.amount * share.share)
            .collect::<Vec<_>>();
        for (total, allocated) in owed.iter_mut().zip(&allocations) {
            *total += allocated;
        }
        if include_breakdown {
            rows.push(AllocatedEntry {
                entry: entry.clone(),
                allocations,
            });
        }
    }

    let breakdown = include_breakdown.then(|| Breakdown {
        columns: shares
            .iter()
            .map(|share| share_column_label(&share.name, share.share))
            .collect(),
        rows,
    });

    Ok(Allocation {
        total_income: total_income(participants),
        total_spent: entries.iter().map(|entry| entry.amount).sum(),
        owed: shares
            .into_iter()
            .zip(owed)
            .map(|(share, owed)| OwedTotal {
                name: share.name,
                share: share.share,
                owed,
            })
            .collect(),
        breakdown,
    })
}

/// Breakdown column label, e.g. `Part Alice (40%)`.
pub fn share_column_label(name: &str, share: f64) -> String {
    format!("Part {name} ({:.0}%)", share * 100.0)
}

/// Rounds to 2 decimals for display.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount for display, e.g. `57.14 €`.
pub fn format_euros(value: f64) -> String {
    format!("{value:.2} €")
}
