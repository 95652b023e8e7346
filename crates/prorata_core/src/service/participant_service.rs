//! Participant use-case service.
//!
//! # Responsibility
//! - Load the participant list, falling back to the built-in defaults only
//!   when no record exists.
//! - Apply add / remove-last / update edits to a caller-owned list and
//!   persist the result.
//!
//! # Invariants
//! - An edit is written before it is applied to the caller's list, so a
//!   failed write leaves both untouched.
//! - `update` with identical values writes nothing.

use crate::model::participant::{default_participants, validate_income, Participant};
use crate::repo::participant_repo::ParticipantRepository;
use crate::service::{ServiceError, ServiceResult};
use log::{debug, info};

/// Use-case service over the participants record.
pub struct ParticipantStore<R: ParticipantRepository> {
    repo: R,
}

impl<R: ParticipantRepository> ParticipantStore<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the persisted list, or the two-person default list when no
    /// record exists.
    ///
    /// # Errors
    /// - `ServiceError::Repo(RepoError::StorageRead)` when the record exists
    ///   but is corrupt. Defaults are never substituted in that case.
    pub fn load(&self) -> ServiceResult<Vec<Participant>> {
        match self.repo.load_participants()? {
            Some(participants) => Ok(participants),
            None => {
                info!("event=participants_defaults module=service status=ok");
                Ok(default_participants())
            }
        }
    }

    /// Appends a `("Nouveau", 1500.0)` participant and persists.
    pub fn add(&self, participants: &mut Vec<Participant>) -> ServiceResult<bool> {
        let mut next = participants.clone();
        next.push(Participant::default());
        self.commit(participants, next)?;
        Ok(true)
    }

    /// Removes the last participant and persists.
    ///
    /// Returns `false` without writing when the list is already empty.
    pub fn remove_last(&self, participants: &mut Vec<Participant>) -> ServiceResult<bool> {
        if participants.is_empty() {
            debug!("event=participant_remove module=service status=noop");
            return Ok(false);
        }
        let mut next = participants.clone();
        next.pop();
        self.commit(participants, next)?;
        Ok(true)
    }

    /// Sets name and income of the participant at `index`.
    ///
    /// Returns `false` without writing when both values already match.
    pub fn update(
        &self,
        participants: &mut Vec<Participant>,
        index: usize,
        name: &str,
        income: f64,
    ) -> ServiceResult<bool> {
        let current = participants
            .get(index)
            .ok_or(ServiceError::ParticipantIndexOutOfRange {
                index,
                len: participants.len(),
            })?;
        validate_income(income).map_err(ServiceError::InvalidParticipant)?;

        if current.name == name && current.income == income {
            return Ok(false);
        }

        let mut next = participants.clone();
        next[index] = Participant::new(name, income);
        self.commit(participants, next)?;
        Ok(true)
    }

    fn commit(&self, participants: &mut Vec<Participant>, next: Vec<Participant>) -> ServiceResult<()> {
        self.repo.save_participants(&next)?;
        *participants = next;
        Ok(())
    }
}
