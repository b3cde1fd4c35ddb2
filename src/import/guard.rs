//! Run-level idempotency gate.

use log::info;

use crate::error::Result;
use crate::store::PersonStore;

/// Destination state read once at the start of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportRunState {
    pub existing_rows: u64,
}

impl ImportRunState {
    /// The import runs only against an empty destination
    #[must_use]
    pub const fn should_import(&self) -> bool {
        self.existing_rows == 0
    }
}

/// Decides whether a run should load anything at all
///
/// This is all-or-nothing: any existing row skips the whole extract. It is
/// not a per-row dedup.
pub struct ImportGuard<'a, S: ?Sized> {
    store: &'a mut S,
}

impl<'a, S: PersonStore + ?Sized> ImportGuard<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Run the single count query
    pub fn check(self) -> Result<ImportRunState> {
        let existing_rows = self.store.count_rows()?;
        info!("Destination holds {existing_rows} rows");
        Ok(ImportRunState { existing_rows })
    }

    /// Shorthand for `check()?.should_import()`
    pub fn should_import(self) -> Result<bool> {
        Ok(self.check()?.should_import())
    }
}
