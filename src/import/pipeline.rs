//! Line-by-line parse, gate and insert.

use std::io::BufRead;
use std::time::{Duration, Instant};

use indicatif::ProgressBar;
use log::info;

use crate::config::AcceptancePolicy;
use crate::document::{self, DocumentKind};
use crate::error::{ImportError, Result};
use crate::record::{PersonRecord, display_line, parse_line};
use crate::store::PersonStore;
use crate::utils::logging::{finish_progress_bar, log_warning};

/// Why a parsed record was not forwarded to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Person document does not have 11 digits
    DocumentLength { found: usize },
    /// Person document has 11 digits but a wrong check digit
    InvalidChecksum,
}

/// What happened to one data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Inserted { rows_affected: u64 },
    Skipped(RejectReason),
}

/// Totals for one load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data lines read, excluding the header
    pub lines_read: usize,
    pub inserted: usize,
    pub skipped: usize,
    /// Sum of affected-row counts reported by the store
    pub rows_affected: u64,
    pub elapsed: Duration,
}

/// Streams an extract into a [`PersonStore`]
///
/// Lines are handled strictly in order. The first error stops the load;
/// rows inserted before it stay in the store.
pub struct LoadPipeline<S> {
    store: S,
    policy: AcceptancePolicy,
    progress: Option<ProgressBar>,
}

impl<S: PersonStore> LoadPipeline<S> {
    pub fn new(store: S, policy: AcceptancePolicy) -> Self {
        Self {
            store,
            policy,
            progress: None,
        }
    }

    /// Tick `progress` once per data line
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Give back the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Load every line after the header
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<LoadSummary> {
        let result = self.load(reader);

        if let Some(pb) = &self.progress {
            match &result {
                Ok(summary) => finish_progress_bar(pb, Some(&format!("{} inserted", summary.inserted))),
                Err(_) => pb.abandon_with_message("aborted"),
            }
        }

        result
    }

    fn load<R: BufRead>(&mut self, reader: R) -> Result<LoadSummary> {
        let start = Instant::now();
        let mut summary = LoadSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            info!("{}", display_line(&line));

            if line_number == 1 {
                continue;
            }

            summary.lines_read += 1;
            match self.process_line(line_number, &line)? {
                RowOutcome::Inserted { rows_affected } => {
                    summary.inserted += 1;
                    summary.rows_affected += rows_affected;
                }
                RowOutcome::Skipped(_) => summary.skipped += 1,
            }

            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        summary.elapsed = start.elapsed();
        Ok(summary)
    }

    /// Parse one data line and insert it if it passes the acceptance gate
    ///
    /// `line_number` is 1-based and only used for reporting.
    pub fn process_line(&mut self, line_number: usize, line: &str) -> Result<RowOutcome> {
        let record = parse_line(line).map_err(|source| ImportError::MalformedRow {
            line: line_number,
            source,
        })?;

        if let Some(reason) = self.reject_reason(&record) {
            log_warning(
                &format!(
                    "skipping person document {:?}: {reason:?}",
                    record.person_document
                ),
                Some(line_number),
            );
            return Ok(RowOutcome::Skipped(reason));
        }

        let rows_affected = self.store.insert(&record)?;
        info!("Insert confirmed: {rows_affected} row(s) affected (line {line_number})");

        Ok(RowOutcome::Inserted { rows_affected })
    }

    fn reject_reason(&self, record: &PersonRecord) -> Option<RejectReason> {
        if !record.has_person_document_length() {
            return Some(RejectReason::DocumentLength {
                found: record.person_document.len(),
            });
        }

        if self.policy == AcceptancePolicy::Checksum
            && !document::validate(DocumentKind::Person, &record.person_document)
        {
            return Some(RejectReason::InvalidChecksum);
        }

        None
    }
}
