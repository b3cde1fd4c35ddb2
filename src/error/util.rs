//! Utility functions for error handling
//!
//! This module provides utility functions to make file access failures
//! carry the path and purpose they were needed for.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ImportError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(file_error(
            path,
            io::ErrorKind::NotFound,
            format!("File not found (needed for: {purpose})"),
        ));
    }

    if !path.is_file() {
        return Err(file_error(
            path,
            io::ErrorKind::InvalidInput,
            format!("Path is not a file (expected a file for: {purpose})"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        file_error(path, e.kind(), format!("{context}: {e}"))
    })
}

/// Attach a path to an IO error raised while reading from it
pub fn with_path(path: &Path, error: io::Error) -> ImportError {
    ImportError::File {
        path: path.to_path_buf(),
        source: error,
    }
}

fn file_error(path: &Path, kind: io::ErrorKind, message: String) -> ImportError {
    with_path(path, io::Error::new(kind, message))
}
