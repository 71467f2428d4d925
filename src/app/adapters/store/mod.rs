//! Record storage adapters
//!
//! The import pipeline talks to storage only through the [`RecordStore`]
//! trait: append a batch, fetch everything back, or wipe the store. Two
//! implementations are provided:
//! - [`JsonFileStore`] - durable single-file JSON store with atomic rewrites
//! - [`MemoryStore`] - in-process store for tests and dry runs

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::Result;
use crate::app::models::Measurement;

/// Durable append/fetch/wipe of canonical measurement records
///
/// Implementations serialize their own mutations; callers assume a single
/// logical writer. `append` is all-or-nothing: a failure must not leave a
/// partial batch visible.
pub trait RecordStore: Send + Sync {
    /// Persist all given records as one atomic batch
    fn append(&self, records: &[Measurement]) -> Result<()>;

    /// Return all records ordered ascending by date
    ///
    /// The sort is stable, so records sharing a date keep insertion order.
    fn fetch_all(&self) -> Result<Vec<Measurement>>;

    /// Remove all records
    fn wipe(&self) -> Result<()>;
}
