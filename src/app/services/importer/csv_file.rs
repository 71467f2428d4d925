//! CSV importer for heat-loss measurement exports
//!
//! Handles plain comma-separated text: first non-blank line is the header,
//! every following non-blank line is one measurement. There is no support
//! for quoted fields or escaped commas (known limitation of the source
//! exports). Parsing never fails a row — missing columns, short lines, and
//! unparseable cells all degrade to documented defaults.

use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, warn};

use super::coercion::{parse_decimal, parse_timestamp};
use super::column_map::{CanonicalField, ColumnMap};
use super::dispatcher::Importer;
use super::stats::{ImportOutcome, ImportStats};
use crate::app::models::Measurement;
use crate::constants::{CSV_EXTENSION, UNKNOWN_LOCATION};
use crate::{Error, Result};

/// Importer for `.csv` measurement exports
#[derive(Debug, Default)]
pub struct CsvImporter;

impl CsvImporter {
    /// Create a new CSV importer
    pub fn new() -> Self {
        Self
    }

    /// Parse raw CSV text into canonical records
    ///
    /// Pure with respect to its input: all I/O happens in [`Importer::import`].
    /// The fallback instant for unparseable dates is captured once per call,
    /// so every defaulted date within one run carries the same timestamp.
    pub fn parse_records(&self, content: &str) -> ImportOutcome {
        let imported_at = Utc::now();
        let mut stats = ImportStats::new();

        let lines: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        let Some((header, data_lines)) = lines.split_first() else {
            return ImportOutcome::empty();
        };

        let tokens: Vec<String> = header
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .collect();

        let column_map = ColumnMap::resolve(&tokens);
        stats.columns_resolved = column_map.resolved_count();
        if column_map.is_empty() {
            // Still proceed: every row becomes all-default values.
            warn!("No canonical field matched the header; importing defaults only");
        }

        let mut records = Vec::with_capacity(data_lines.len());

        for line in data_lines {
            let cells: Vec<&str> = line.split(',').collect();
            records.push(self.parse_row(&cells, &column_map, imported_at, &mut stats));
            stats.rows_imported += 1;
        }

        debug!(
            "Parsed {} rows, {} defaults applied",
            stats.rows_imported,
            stats.defaults_applied()
        );

        ImportOutcome { records, stats }
    }

    /// Coerce one data row into a measurement, counting defaulting events
    fn parse_row(
        &self,
        cells: &[&str],
        column_map: &ColumnMap,
        imported_at: chrono::DateTime<Utc>,
        stats: &mut ImportStats,
    ) -> Measurement {
        let date = match parse_timestamp(cell(cells, column_map, CanonicalField::Date)) {
            Some(date) => date,
            None => {
                stats.dates_defaulted += 1;
                imported_at
            }
        };

        let raw_location = cell(cells, column_map, CanonicalField::Location);
        let location = if raw_location.is_empty() {
            stats.locations_defaulted += 1;
            UNKNOWN_LOCATION.to_string()
        } else {
            raw_location.to_string()
        };

        let mut decimal = |field: CanonicalField| -> f64 {
            match parse_decimal(cell(cells, column_map, field)) {
                Some(value) => value,
                None => {
                    stats.values_defaulted += 1;
                    0.0
                }
            }
        };

        Measurement::new(
            date,
            location,
            decimal(CanonicalField::DoorWidth),
            decimal(CanonicalField::TempInside),
            decimal(CanonicalField::TempOutside),
            decimal(CanonicalField::HeatLossMj),
            decimal(CanonicalField::GasSavedM3),
            decimal(CanonicalField::CostSavedEur),
        )
    }
}

/// Read the cell at a field's resolved index, or the empty string when the
/// field is unresolved or the row is too short
fn cell<'a>(cells: &[&'a str], column_map: &ColumnMap, field: CanonicalField) -> &'a str {
    column_map
        .index_of(field)
        .and_then(|index| cells.get(index))
        .copied()
        .unwrap_or("")
}

#[async_trait]
impl Importer for CsvImporter {
    fn can_import(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case(CSV_EXTENSION))
    }

    async fn import(&self, path: &Path) -> Result<ImportOutcome> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(format!("Failed to read file {}", path.display()), e)
        })?;

        Ok(self.parse_records(&content))
    }
}
