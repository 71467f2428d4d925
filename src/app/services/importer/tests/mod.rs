//! Test utilities and fixtures for the import pipeline
//!
//! This module provides shared CSV fixtures and helper functions used across
//! the importer test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod column_map_tests;
mod csv_file_tests;

/// A well-formed bilingual export covering all eight canonical fields
///
/// The width column is labeled `Breedte` rather than `Deurbreedte`: the
/// latter contains the CostSavedEur keyword `eur` and would claim that field
/// ahead of the real cost column under first-match-in-header-order
/// resolution (pinned in `column_map_tests`).
pub fn full_export_csv() -> &'static str {
    "Datum,Locatie,Breedte,TempBinnen,TempBuiten,Warmteverlies (MJ),Gas (m3),Kosten (EUR)\n\
     2024-01-15,Voordeur,2.5,19,-2,120.5,14.2,11.9\n\
     16-01-2024,Achterdeur,1.8,18.5,0,95,11.1,9.3\n"
}

/// The same data as [`full_export_csv`] with permuted header order
pub fn permuted_export_csv() -> &'static str {
    "Kosten (EUR),Warmteverlies (MJ),Locatie,Datum,Gas (m3),TempBuiten,TempBinnen,Breedte\n\
     11.9,120.5,Voordeur,2024-01-15,14.2,-2,19,2.5\n\
     9.3,95,Achterdeur,16-01-2024,11.1,0,18.5,1.8\n"
}

/// Minimal export with only three recognizable columns
pub fn minimal_export_csv() -> &'static str {
    "Datum,Locatie,MJ\n2024-01-01,Voordeur,100\n,Achterdeur,50\n"
}

/// Export whose header matches no canonical field at all
pub fn unresolvable_export_csv() -> &'static str {
    "foo,bar,baz\n1,2,3\n4,5,6\n"
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
