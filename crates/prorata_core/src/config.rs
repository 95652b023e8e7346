//! Storage location configuration.
//!
//! # Responsibility
//! - Resolve where the participants and expense records live.
//!
//! # Invariants
//! - Both records live in the same data directory.
//! - A blank `PRORATA_DATA_DIR` or `PRORATA_LOG_DIR` is treated as unset.

use std::path::{Path, PathBuf};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "PRORATA_DATA_DIR";
/// Environment variable naming the log directory. Logging stays off when unset.
pub const LOG_DIR_ENV: &str = "PRORATA_LOG_DIR";
/// File name of the participants record.
pub const DEFAULT_PARTICIPANTS_FILE: &str = "config_participants.json";
/// File name of the expense record.
pub const DEFAULT_EXPENSES_FILE: &str = "historique_budget.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    data_dir: PathBuf,
    participants_file: String,
    expenses_file: String,
}

impl StorageConfig {
    /// Uses the default record file names inside `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            participants_file: DEFAULT_PARTICIPANTS_FILE.to_string(),
            expenses_file: DEFAULT_EXPENSES_FILE.to_string(),
        }
    }

    /// Resolves the data directory from `PRORATA_DATA_DIR`, falling back to
    /// the current directory.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DATA_DIR_ENV).ok())
    }

    fn from_env_value(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new("."),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn participants_path(&self) -> PathBuf {
        self.data_dir.join(&self.participants_file)
    }

    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir.join(&self.expenses_file)
    }
}

/// Reads `PRORATA_LOG_DIR`, resolved against the current directory.
///
/// Returns `None` when unset or blank.
pub fn log_dir_from_env() -> Option<PathBuf> {
    log_dir_from_value(std::env::var(LOG_DIR_ENV).ok())
}

fn log_dir_from_value(raw: Option<String>) -> Option<PathBuf> {
    let dir = PathBuf::from(raw.as_deref().map(str::trim).filter(|dir| !dir.is_empty())?);
    if dir.is_absolute() {
        return Some(dir);
    }
    std::env::current_dir().ok().map(|cwd| cwd.join(dir))
}
