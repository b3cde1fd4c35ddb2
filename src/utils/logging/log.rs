//! Logging utilities
//!
//! This module provides standardized log lines for the phases of an import.

use std::path::Path;
use std::time::Duration;

/// Log the start of an operation on a file
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the completion of an operation on a file
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `path` - Path of the file that was operated on
/// * `rows` - Number of rows written
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, path: &Path, rows: u64, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} rows from {} in {:?}",
            operation,
            rows,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} rows from {}",
            operation,
            rows,
            path.display()
        ),
    }
}

/// Log a warning tied to a source line
///
/// # Arguments
/// * `message` - Warning message
/// * `line` - Optional 1-based source line number
pub fn log_warning(message: &str, line: Option<usize>) {
    if let Some(line) = line {
        log::warn!("line {line}: {message}");
    } else {
        log::warn!("{message}");
    }
}
