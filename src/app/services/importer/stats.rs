//! Import statistics and result structures
//!
//! One ingest run reports how lenient it had to be: how many rows were
//! produced and how many cells fell back to a default. The statistics are
//! advisory (logging and CLI summaries); they never affect the records.

use crate::app::models::Measurement;

/// Import result with canonical records and run statistics
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// Canonical records in input line order
    pub records: Vec<Measurement>,

    /// Statistics for this ingest run
    pub stats: ImportStats,
}

impl ImportOutcome {
    /// Create an empty outcome (blank input)
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            stats: ImportStats::new(),
        }
    }
}

/// Statistics for one ingest run
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ImportStats {
    /// Number of data rows turned into records
    pub rows_imported: usize,

    /// Number of canonical fields resolved against the header
    pub columns_resolved: usize,

    /// Number of date cells that fell back to the import instant
    pub dates_defaulted: usize,

    /// Number of location cells replaced with the sentinel label
    pub locations_defaulted: usize,

    /// Number of numeric cells that fell back to zero
    pub values_defaulted: usize,
}

impl ImportStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_imported: 0,
            columns_resolved: 0,
            dates_defaulted: 0,
            locations_defaulted: 0,
            values_defaulted: 0,
        }
    }

    /// Total number of cells that degraded to a default value
    pub fn defaults_applied(&self) -> usize {
        self.dates_defaulted + self.locations_defaulted + self.values_defaulted
    }

    /// Check whether every canonical field found a column
    pub fn is_fully_resolved(&self) -> bool {
        self.columns_resolved == super::column_map::CanonicalField::ALL.len()
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
