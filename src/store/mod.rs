//! Destination stores for parsed person records
//!
//! The import only needs three things from its destination: a connectivity
//! probe, a row count for the idempotency gate, and a single-row insert.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryStore, StoredPerson};
pub use postgres::PgPersonStore;

use crate::error::Result;
use crate::record::PersonRecord;

/// Persistence sink for person records
///
/// Calls are synchronous and issued one at a time, in source file order.
/// Each insert stands on its own; there is no enclosing transaction.
pub trait PersonStore {
    /// Check that the destination is reachable
    fn ping(&mut self) -> Result<()>;

    /// Count the rows already present in the destination table
    fn count_rows(&mut self) -> Result<u64>;

    /// Insert one record, stamping its creation time in the store
    ///
    /// Returns the number of rows affected.
    fn insert(&mut self, record: &PersonRecord) -> Result<u64>;
}

impl<S: PersonStore + ?Sized> PersonStore for &mut S {
    fn ping(&mut self) -> Result<()> {
        (**self).ping()
    }

    fn count_rows(&mut self) -> Result<u64> {
        (**self).count_rows()
    }

    fn insert(&mut self, record: &PersonRecord) -> Result<u64> {
        (**self).insert(record)
    }
}
