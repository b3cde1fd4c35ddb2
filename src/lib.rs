//! A Rust library for validating taxpayer documents and loading a
//! whitespace-delimited person extract into PostgreSQL exactly once.

pub mod config;
pub mod document;
pub mod error;
pub mod import;
pub mod record;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{AcceptancePolicy, DatabaseConfig, ImportConfig};
pub use error::{ErrorCategory, ImportError, Result};
pub use record::{ParseError, PersonRecord};

// Validation
pub use document::{
    DocumentKind, checksum, normalize, validate, validate_entity_document,
    validate_person_document,
};

// Import orchestration
pub use import::{
    ImportGuard, ImportOutcome, ImportRunState, LoadPipeline, LoadSummary, RejectReason,
    RowOutcome, run_import,
};

// Stores
pub use store::{MemoryStore, PersonStore, PgPersonStore};
