//! Durable single-file JSON record store
//!
//! All records live in one JSON array on disk. An append reads the current
//! file, merges the batch, and rewrites through a named temporary file that
//! is persisted over the target path — a failed write never truncates or
//! half-updates existing data. A missing file reads as an empty store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

use super::RecordStore;
use crate::app::models::Measurement;
use crate::{Error, Result};

/// Record store backed by a single JSON file with atomic rewrites
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes the read-merge-rewrite cycle; disk state is the source of truth.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given file path
    ///
    /// The file is created lazily on the first append; its parent directory
    /// is created on demand.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current record set, treating a missing file as empty
    fn load(&self) -> Result<Vec<Measurement>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let records = serde_json::from_str(&content).map_err(|e| {
                    Error::store(
                        format!("Failed to decode record store {}", self.path.display()),
                        e,
                    )
                })?;
                Ok(records)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(Error::store(
                format!("Failed to read record store {}", self.path.display()),
                e,
            )),
        }
    }

    /// Rewrite the store file atomically with the given record set
    fn write_atomic(&self, records: &[Measurement]) -> Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(|e| {
            Error::store(
                format!("Failed to create store directory {}", parent.display()),
                e,
            )
        })?;

        let json = serde_json::to_string_pretty(records)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| Error::store("Failed to create temporary store file", e))?;
        temp_file
            .write_all(json.as_bytes())
            .map_err(|e| Error::store("Failed to write temporary store file", e))?;
        temp_file.persist(&self.path).map_err(|e| {
            Error::store(
                format!("Failed to persist record store {}", self.path.display()),
                e,
            )
        })?;

        debug!(
            "Wrote {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn append(&self, records: &[Measurement]) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::store_message("Store lock poisoned"))?;

        let mut all = self.load()?;
        all.extend_from_slice(records);
        self.write_atomic(&all)?;

        info!(
            "Appended {} records to {} ({} total)",
            records.len(),
            self.path.display(),
            all.len()
        );
        Ok(())
    }

    fn fetch_all(&self) -> Result<Vec<Measurement>> {
        let mut records = self.load()?;
        records.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(records)
    }

    fn wipe(&self) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::store_message("Store lock poisoned"))?;

        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Wiped record store {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::store(
                format!("Failed to wipe record store {}", self.path.display()),
                e,
            )),
        }
    }
}
