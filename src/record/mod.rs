//! Person records parsed from the whitespace-delimited extract
//!
//! A data line carries eight logical fields once its whitespace runs are
//! collapsed into `;` separators. The literal token `NULL` marks an absent
//! value and is mapped per field.

pub mod parser;

pub use parser::{PersonRecord, display_line, parse_line};

/// Token marking an absent value in the source data
pub const NULL_SENTINEL: &str = "NULL";

/// Value stored for a missing last purchase date
pub const DEFAULT_PURCHASE_DATE: &str = "1900-01-01";

/// Separator used for the collapsed display form of a line
pub const FIELD_SEPARATOR: &str = ";";

/// Number of logical fields in a data line
pub const FIELD_COUNT: usize = 8;

/// Errors that make a data line unusable
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The line has fewer fields than a record needs
    #[error("expected {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    /// A numeric field could not be parsed after locale fix-up
    #[error("invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
