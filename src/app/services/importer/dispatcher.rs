//! Format dispatch over an open set of importers
//!
//! Each importer declares whether it can handle an input path and knows how
//! to ingest it. Dispatch walks the registered importers in order and hands
//! the input to the first one that claims it. Adding a format means
//! registering another importer, never extending a type switch here.

use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info};

use super::csv_file::CsvImporter;
use super::stats::ImportOutcome;
use crate::{Error, Result};

/// A component capable of testing applicability to an input and converting
/// it into canonical records
#[async_trait]
pub trait Importer: Send + Sync {
    /// Check whether this importer claims the given input
    fn can_import(&self, path: &Path) -> bool;

    /// Ingest the input into canonical records with statistics
    async fn import(&self, path: &Path) -> Result<ImportOutcome>;
}

/// Dispatches inputs to the first registered importer that claims them
pub struct ImportDispatcher {
    importers: Vec<Box<dyn Importer>>,
}

impl ImportDispatcher {
    /// Create a dispatcher with no registered importers
    pub fn new() -> Self {
        Self {
            importers: Vec::new(),
        }
    }

    /// Create a dispatcher with the built-in importers registered
    pub fn with_default_importers() -> Self {
        Self::new().with_importer(Box::new(CsvImporter::new()))
    }

    /// Register an additional importer, evaluated after existing ones
    pub fn with_importer(mut self, importer: Box<dyn Importer>) -> Self {
        self.importers.push(importer);
        self
    }

    /// Dispatch an input to the first importer claiming it
    ///
    /// Fails with [`Error::UnsupportedFormat`] when no registered importer
    /// claims the input; nothing is read from disk in that case.
    pub async fn dispatch(&self, path: &Path) -> Result<ImportOutcome> {
        match self
            .importers
            .iter()
            .find(|importer| importer.can_import(path))
        {
            Some(importer) => {
                info!("Importing {}", path.display());
                importer.import(path).await
            }
            None => {
                debug!("No importer claims {}", path.display());
                Err(Error::unsupported_format(path.display().to_string()))
            }
        }
    }
}

impl Default for ImportDispatcher {
    fn default() -> Self {
        Self::with_default_importers()
    }
}
