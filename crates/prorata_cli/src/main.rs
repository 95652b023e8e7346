//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `prorata_core` wiring.
//! - Given a data directory, print the current split without modifying it.
//! - Write rolling logs when `PRORATA_LOG_DIR` is set.

use prorata_core::{format_euros, log_dir_from_env, FileSession, StorageConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Some(log_dir) = log_dir_from_env() {
        let level = prorata_core::default_log_level();
        if let Err(err) = prorata_core::init_logging(level, &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    println!("prorata_core version={}", prorata_core::core_version());

    let config = match std::env::args().nth(1) {
        Some(dir) => StorageConfig::new(dir),
        None => StorageConfig::from_env(),
    };

    let session = match FileSession::open(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("total_income={}", format_euros(session.total_income()));
    if !session.can_allocate() {
        println!("nothing to split");
        return ExitCode::SUCCESS;
    }

    match session.compute_allocation(false) {
        Ok(allocation) => {
            println!("total_spent={}", format_euros(allocation.total_spent));
            for owed in &allocation.owed {
                println!(
                    "{} ({:.0}%) owes {}",
                    owed.name,
                    owed.share * 100.0,
                    format_euros(owed.owed)
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
