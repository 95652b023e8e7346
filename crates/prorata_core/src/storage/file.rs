//! Whole-record file I/O.
//!
//! # Responsibility
//! - Load a record's raw bytes, treating "not found" as absence.
//! - Replace a record through a same-directory temp file and rename.
//! - Delete a record.
//!
//! # Invariants
//! - A failed write leaves the previous record untouched.
//! - Every call emits one `record_*` logging event with duration and status.

use super::{StorageError, StorageResult};
use log::{debug, error, info};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::time::Instant;
use tempfile::NamedTempFile;

/// Reads a whole record.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_record(path: &Path) -> StorageResult<Option<Vec<u8>>> {
    let started_at = Instant::now();
    match fs::read(path) {
        Ok(bytes) => {
            debug!(
                "event=record_read module=storage status=ok bytes={} duration_ms={}",
                bytes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(Some(bytes))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("event=record_read module=storage status=missing");
            Ok(None)
        }
        Err(err) => {
            error!(
                "event=record_read module=storage status=error duration_ms={} error_code=read_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(StorageError::io(path, err))
        }
    }
}

/// Atomically replaces a record with `bytes`.
///
/// # Side effects
/// - Creates the parent directory when missing.
/// - Writes to a temp file next to `path`, syncs it, then renames it over
///   `path`.
pub fn write_record(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let started_at = Instant::now();
    match write_atomically(path, bytes) {
        Ok(()) => {
            info!(
                "event=record_write module=storage status=ok bytes={} duration_ms={}",
                bytes.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=record_write module=storage status=error duration_ms={} error_code=write_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Deletes a record.
///
/// Returns whether a file was actually removed.
pub fn remove_record(path: &Path) -> StorageResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("event=record_remove module=storage status=ok");
            Ok(true)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("event=record_remove module=storage status=missing");
            Ok(false)
        }
        Err(err) => {
            error!(
                "event=record_remove module=storage status=error error_code=remove_failed error={}",
                err
            );
            Err(StorageError::io(path, err))
        }
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> StorageResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|err| StorageError::io(dir, err))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|err| StorageError::io(dir, err))?;
    temp.write_all(bytes)
        .map_err(|err| StorageError::io(temp.path(), err))?;
    temp.as_file()
        .sync_all()
        .map_err(|err| StorageError::io(temp.path(), err))?;
    temp.persist(path)
        .map_err(|err| StorageError::io(path, err.error))?;
    Ok(())
}
