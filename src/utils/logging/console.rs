//! Console output utilities
//!
//! This module prints the human-readable outcome of an import run.

use crate::import::{ImportOutcome, LoadSummary};

/// Render the final status of a run
#[must_use]
pub fn format_import_summary(outcome: &ImportOutcome) -> String {
    match outcome {
        ImportOutcome::AlreadyPresent { existing_rows } => {
            format!("Data already present: {existing_rows} rows, nothing imported")
        }
        ImportOutcome::Completed(summary) => format_load_summary(summary),
    }
}

fn format_load_summary(summary: &LoadSummary) -> String {
    format!(
        "Completed successfully: {} lines read, {} inserted, {} skipped ({} rows affected) in {:?}",
        summary.lines_read,
        summary.inserted,
        summary.skipped,
        summary.rows_affected,
        summary.elapsed
    )
}

/// Print the final status of a run
pub fn print_import_summary(outcome: &ImportOutcome) {
    println!("{}", format_import_summary(outcome));
}
