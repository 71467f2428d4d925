//! Configuration management and validation.
//!
//! Provides the runtime configuration for the import workflow: where the
//! record store lives and how many files may be ingested concurrently.

use crate::constants::{APP_DATA_DIR, DEFAULT_STORE_FILE, MAX_IMPORT_WORKERS};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Runtime configuration for import and storage
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON record store file
    pub store_path: PathBuf,

    /// Maximum number of files ingested concurrently during an import run
    pub max_concurrent_imports: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            max_concurrent_imports: num_cpus::get().min(MAX_IMPORT_WORKERS),
        }
    }
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the record store path
    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = path;
        self
    }

    /// Override the import concurrency bound
    pub fn with_max_concurrent_imports(mut self, workers: usize) -> Self {
        self.max_concurrent_imports = workers;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_imports == 0 {
            return Err(Error::configuration(
                "max_concurrent_imports must be at least 1",
            ));
        }

        if self.store_path.is_dir() {
            return Err(Error::configuration(format!(
                "Store path is a directory, expected a file: {}",
                self.store_path.display()
            )));
        }

        debug!(
            "Configuration validated: store={}, workers={}",
            self.store_path.display(),
            self.max_concurrent_imports
        );

        Ok(())
    }
}

/// Default store location: `<user data dir>/warmte_processor/records.json`,
/// falling back to the current directory when no data dir is available
fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DATA_DIR)
        .join(DEFAULT_STORE_FILE)
}
