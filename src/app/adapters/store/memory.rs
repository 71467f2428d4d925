//! In-memory record store for tests and dry runs

use std::sync::{Mutex, MutexGuard};

use super::RecordStore;
use crate::app::models::Measurement;
use crate::{Error, Result};

/// Record store backed by a mutex-guarded vector
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Measurement>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub fn len(&self) -> Result<usize> {
        Ok(self.guard()?.len())
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.guard()?.is_empty())
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Measurement>>> {
        self.records
            .lock()
            .map_err(|_| Error::store_message("Memory store lock poisoned"))
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, records: &[Measurement]) -> Result<()> {
        self.guard()?.extend_from_slice(records);
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<Measurement>> {
        let mut records = self.guard()?.clone();
        records.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(records)
    }

    fn wipe(&self) -> Result<()> {
        self.guard()?.clear();
        Ok(())
    }
}
