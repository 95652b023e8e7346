//! Flat-file storage primitives for durable records.
//!
//! # Responsibility
//! - Read and write whole records (one file per record).
//! - Keep I/O details below the repository layer.
//!
//! # Invariants
//! - Writes replace the target file atomically; readers see the old record
//!   or the new one, never a partial write.
//! - A missing record is reported as `None`, not as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod file;

pub use file::{read_record, remove_record, write_record};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
