//! Import orchestration: idempotency gate, then the line-by-line load.

pub mod guard;
pub mod pipeline;

use std::io::BufReader;

use log::info;

pub use guard::{ImportGuard, ImportRunState};
pub use pipeline::{LoadPipeline, LoadSummary, RejectReason, RowOutcome};

use crate::config::ImportConfig;
use crate::error::util::{safe_open_file, with_path};
use crate::error::{ImportError, Result};
use crate::store::PersonStore;
use crate::utils::logging::{create_spinner, log_operation_complete, log_operation_start};

/// Result of a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The destination already held rows; nothing was read or written
    AlreadyPresent { existing_rows: u64 },
    /// The extract was loaded
    Completed(LoadSummary),
}

/// Run one import against `store`
///
/// The source file is opened only after the destination is found empty.
pub fn run_import<S: PersonStore>(config: &ImportConfig, store: &mut S) -> Result<ImportOutcome> {
    let state = ImportGuard::new(&mut *store).check()?;
    if !state.should_import() {
        info!(
            "Data already present ({} rows), skipping import",
            state.existing_rows
        );
        return Ok(ImportOutcome::AlreadyPresent {
            existing_rows: state.existing_rows,
        });
    }
    info!("No data in destination");

    let path = &config.source_path;
    log_operation_start("Loading person extract from", path);
    let file = safe_open_file(path, "loading person extract")?;

    let mut pipeline = LoadPipeline::new(&mut *store, config.acceptance);
    if config.show_progress {
        pipeline = pipeline.with_progress(create_spinner(Some("loading person extract")));
    }

    let summary = pipeline
        .run(BufReader::new(file))
        .map_err(|e| match e {
            ImportError::Io(source) => with_path(path, source),
            other => other,
        })?;

    log_operation_complete("inserted", path, summary.rows_affected, Some(summary.elapsed));
    Ok(ImportOutcome::Completed(summary))
}
