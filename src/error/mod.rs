//! Error handling for the person import.

pub mod util;

use std::io;
use std::path::PathBuf;

use crate::record::ParseError;

/// Specialized error type for the import
///
/// Every variant is fatal to the run. Rows rejected by the acceptance gate
/// are not errors and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// Opening or pinging the destination store failed
    #[error("Connection error: {0}")]
    Connection(String),

    /// Count query, insert or affected-row retrieval failed
    #[error("Query error: {0}")]
    Query(String),

    /// A data line could not be turned into a record
    #[error("Malformed row at line {line}: {source}")]
    MalformedRow {
        /// 1-based line number in the source file (the header is line 1)
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Error opening or reading a specific file
    #[error("IO error for {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error reading from an unnamed source
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification used when reporting a failed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Connectivity,
    Query,
    MalformedRow,
    Io,
    Config,
}

impl ImportError {
    /// Which phase of the taxonomy this error belongs to
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Connection(_) => ErrorCategory::Connectivity,
            Self::Query(_) => ErrorCategory::Query,
            Self::MalformedRow { .. } => ErrorCategory::MalformedRow,
            Self::File { .. } | Self::Io(_) => ErrorCategory::Io,
            Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// Wrap a database error with a description of the failed operation
    pub fn query<E: std::fmt::Display>(operation: &str, error: E) -> Self {
        Self::Query(format!("{operation}: {error}"))
    }

    /// Wrap a connection error with a description of the failed step
    pub fn connection<E: std::fmt::Display>(step: &str, error: E) -> Self {
        Self::Connection(format!("{step}: {error}"))
    }
}

/// Result type for import operations
pub type Result<T> = std::result::Result<T, ImportError>;
