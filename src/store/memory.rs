//! In-process store, used for dry runs and tests.

use chrono::{DateTime, Utc};

use crate::error::{ImportError, Result};
use crate::record::PersonRecord;
use crate::store::PersonStore;

/// A record as held by [`MemoryStore`]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPerson {
    pub record: PersonRecord,
    pub created_at: DateTime<Utc>,
}

/// A `Vec`-backed [`PersonStore`]
///
/// Can be seeded with existing rows to exercise the idempotency gate, and
/// told to fail on the n-th insert to exercise mid-run query failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<StoredPerson>,
    preexisting: u64,
    fail_on_insert: Option<usize>,
    count_queries: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend `count` rows were loaded by an earlier run
    #[must_use]
    pub fn with_existing_rows(mut self, count: u64) -> Self {
        self.preexisting = count;
        self
    }

    /// Fail the insert with this 1-based ordinal
    #[must_use]
    pub fn failing_on_insert(mut self, ordinal: usize) -> Self {
        self.fail_on_insert = Some(ordinal);
        self
    }

    /// Rows inserted through this store, in insertion order
    #[must_use]
    pub fn rows(&self) -> &[StoredPerson] {
        &self.rows
    }

    /// How many times the row count was queried
    #[must_use]
    pub fn count_queries(&self) -> usize {
        self.count_queries
    }
}

impl PersonStore for MemoryStore {
    fn ping(&mut self) -> Result<()> {
        Ok(())
    }

    fn count_rows(&mut self) -> Result<u64> {
        self.count_queries += 1;
        Ok(self.preexisting + self.rows.len() as u64)
    }

    fn insert(&mut self, record: &PersonRecord) -> Result<u64> {
        if self.fail_on_insert == Some(self.rows.len() + 1) {
            return Err(ImportError::query(
                "Failed to insert person record",
                "injected failure",
            ));
        }

        self.rows.push(StoredPerson {
            record: record.clone(),
            created_at: Utc::now(),
        });
        Ok(1)
    }
}
