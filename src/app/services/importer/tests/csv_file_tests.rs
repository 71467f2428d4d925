//! Tests for the CSV importer

use super::{
    create_temp_file, full_export_csv, minimal_export_csv, permuted_export_csv,
    unresolvable_export_csv,
};
use crate::app::services::importer::csv_file::CsvImporter;
use crate::app::services::importer::dispatcher::Importer;
use crate::constants::UNKNOWN_LOCATION;
use chrono::{TimeZone, Utc};
use std::path::Path;

#[test]
fn test_full_export_parses_all_fields() {
    let outcome = CsvImporter::new().parse_records(full_export_csv());

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stats.rows_imported, 2);
    assert!(outcome.stats.is_fully_resolved());

    let first = &outcome.records[0];
    assert_eq!(first.date, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    assert_eq!(first.location, "Voordeur");
    assert_eq!(first.door_width, 2.5);
    assert_eq!(first.temp_inside, 19.0);
    assert_eq!(first.temp_outside, -2.0);
    assert_eq!(first.heat_loss_mj, 120.5);
    assert_eq!(first.gas_saved_m3, 14.2);
    assert_eq!(first.cost_saved_eur, 11.9);

    // Second row uses the dd-MM-yyyy locale date.
    let second = &outcome.records[1];
    assert_eq!(second.date, Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap());
    assert_eq!(second.location, "Achterdeur");
}

#[test]
fn test_header_permutation_yields_equivalent_records() {
    let importer = CsvImporter::new();
    let straight = importer.parse_records(full_export_csv());
    let permuted = importer.parse_records(permuted_export_csv());

    assert_eq!(straight.records.len(), permuted.records.len());
    for (a, b) in straight.records.iter().zip(&permuted.records) {
        assert_eq!(a.date, b.date);
        assert_eq!(a.location, b.location);
        assert_eq!(a.door_width, b.door_width);
        assert_eq!(a.temp_inside, b.temp_inside);
        assert_eq!(a.temp_outside, b.temp_outside);
        assert_eq!(a.heat_loss_mj, b.heat_loss_mj);
        assert_eq!(a.gas_saved_m3, b.gas_saved_m3);
        assert_eq!(a.cost_saved_eur, b.cost_saved_eur);
    }
}

#[test]
fn test_minimal_export_scenario() {
    let before = Utc::now();
    let outcome = CsvImporter::new().parse_records(minimal_export_csv());
    let after = Utc::now();

    assert_eq!(outcome.records.len(), 2);

    let first = &outcome.records[0];
    assert_eq!(first.date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(first.location, "Voordeur");
    assert_eq!(first.heat_loss_mj, 100.0);
    // Unresolved numeric fields default to zero.
    assert_eq!(first.door_width, 0.0);
    assert_eq!(first.gas_saved_m3, 0.0);

    // The second row has an empty date cell: it defaults to the import
    // instant, which lies within the surrounding time window.
    let second = &outcome.records[1];
    assert!(second.date >= before && second.date <= after);
    assert_eq!(second.location, "Achterdeur");
    assert_eq!(second.heat_loss_mj, 50.0);

    assert_eq!(outcome.stats.dates_defaulted, 1);
}

#[test]
fn test_empty_input_yields_empty_outcome() {
    let importer = CsvImporter::new();

    for content in ["", "\n\n", "   \n \t \n"] {
        let outcome = importer.parse_records(content);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats.rows_imported, 0);
    }
}

#[test]
fn test_header_only_input_yields_no_records() {
    let outcome = CsvImporter::new().parse_records("Datum,Locatie,MJ\n");
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.columns_resolved, 3);
}

#[test]
fn test_blank_lines_are_dropped() {
    let content = "Datum,Locatie,MJ\n\n2024-01-01,Voordeur,100\n   \n2024-01-02,Achterdeur,50\n";
    let outcome = CsvImporter::new().parse_records(content);

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].location, "Voordeur");
    assert_eq!(outcome.records[1].location, "Achterdeur");
}

#[test]
fn test_unresolvable_header_still_imports_default_rows() {
    let outcome = CsvImporter::new().parse_records(unresolvable_export_csv());

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stats.columns_resolved, 0);

    for record in &outcome.records {
        assert_eq!(record.location, UNKNOWN_LOCATION);
        assert_eq!(record.heat_loss_mj, 0.0);
        assert_eq!(record.door_width, 0.0);
    }
}

#[test]
fn test_missing_location_cell_gets_sentinel() {
    let content = "Datum,Locatie,MJ\n2024-01-01,,100\n";
    let outcome = CsvImporter::new().parse_records(content);

    assert_eq!(outcome.records[0].location, UNKNOWN_LOCATION);
    assert!(!outcome.records[0].location.is_empty());
    assert_eq!(outcome.stats.locations_defaulted, 1);
}

#[test]
fn test_short_line_reads_missing_cells_as_empty() {
    // Row ends before the MJ column: the cell reads as empty and defaults.
    let content = "Datum,Locatie,MJ\n2024-01-01,Voordeur\n";
    let outcome = CsvImporter::new().parse_records(content);

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].location, "Voordeur");
    assert_eq!(outcome.records[0].heat_loss_mj, 0.0);
}

#[test]
fn test_input_line_order_is_preserved() {
    let content = "Locatie,MJ\nEerste,1\nTweede,2\nDerde,3\n";
    let outcome = CsvImporter::new().parse_records(content);

    let locations: Vec<&str> = outcome
        .records
        .iter()
        .map(|r| r.location.as_str())
        .collect();
    assert_eq!(locations, vec!["Eerste", "Tweede", "Derde"]);
}

#[test]
fn test_can_import_matches_csv_extension_case_insensitively() {
    let importer = CsvImporter::new();

    assert!(importer.can_import(Path::new("metingen.csv")));
    assert!(importer.can_import(Path::new("METINGEN.CSV")));
    assert!(!importer.can_import(Path::new("metingen.xlsx")));
    assert!(!importer.can_import(Path::new("metingen")));
}

#[tokio::test]
async fn test_import_reads_file_from_disk() {
    let temp_file = create_temp_file(minimal_export_csv());

    let outcome = CsvImporter::new().import(temp_file.path()).await.unwrap();
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].location, "Voordeur");
}

#[tokio::test]
async fn test_import_missing_file_is_io_error() {
    let result = CsvImporter::new()
        .import(Path::new("/definitely/not/here.csv"))
        .await;

    assert!(matches!(result, Err(crate::Error::Io { .. })));
}
