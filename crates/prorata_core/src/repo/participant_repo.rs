//! Participant record contract and JSON file implementation.
//!
//! # Responsibility
//! - Load and save the full ordered participant list as one record.
//!
//! # Invariants
//! - The record is a JSON array of `{name, income}` objects.
//! - Every save rewrites the whole list.

use super::{RepoError, RepoResult};
use crate::model::participant::Participant;
use crate::storage::{read_record, write_record};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Repository interface for the participants record.
pub trait ParticipantRepository {
    /// Returns `None` when no record has been written yet.
    fn load_participants(&self) -> RepoResult<Option<Vec<Participant>>>;
    fn save_participants(&self, participants: &[Participant]) -> RepoResult<()>;
}

/// JSON-file-backed participant repository.
pub struct JsonParticipantRepository {
    path: PathBuf,
}

impl JsonParticipantRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ParticipantRepository for JsonParticipantRepository {
    fn load_participants(&self) -> RepoResult<Option<Vec<Participant>>> {
        let Some(bytes) = read_record(&self.path)? else {
            return Ok(None);
        };

        let participants: Vec<Participant> =
            serde_json::from_slice(&bytes).map_err(|err| self.unreadable(err.to_string()))?;
        for (index, participant) in participants.iter().enumerate() {
            participant
                .validate()
                .map_err(|err| self.unreadable(format!("participant {index}: {err}")))?;
        }

        info!(
            "event=participants_load module=repo status=ok count={}",
            participants.len()
        );
        Ok(Some(participants))
    }

    fn save_participants(&self, participants: &[Participant]) -> RepoResult<()> {
        for (index, participant) in participants.iter().enumerate() {
            participant
                .validate()
                .map_err(|source| RepoError::InvalidParticipant { index, source })?;
        }

        let bytes = serde_json::to_vec_pretty(participants).map_err(|err| RepoError::Encode {
            path: self.path.clone(),
            detail: err.to_string(),
        })?;
        write_record(&self.path, &bytes)?;

        info!(
            "event=participants_save module=repo status=ok count={}",
            participants.len()
        );
        Ok(())
    }
}

impl JsonParticipantRepository {
    fn unreadable(&self, detail: String) -> RepoError {
        error!("event=participants_load module=repo status=error error_code=record_unreadable");
        RepoError::StorageRead {
            path: self.path.clone(),
            detail,
        }
    }
}
