//! Application constants for warmte processor
//!
//! This module contains default values and fixed strings used throughout
//! the import pipeline and CLI.

// =============================================================================
// Import Defaults
// =============================================================================

/// Sentinel label substituted when a row carries no usable location
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// File extension claimed by the CSV importer
pub const CSV_EXTENSION: &str = "csv";

/// Locale date format accepted after the ISO-8601 attempt fails
pub const LOCALE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Remediation hint attached to unsupported-format errors
pub const UNSUPPORTED_FORMAT_HINT: &str = "export the sheet as CSV and retry";

// =============================================================================
// Storage Defaults
// =============================================================================

/// Directory name under the user data directory holding the record store
pub const APP_DATA_DIR: &str = "warmte_processor";

/// Default record store file name
pub const DEFAULT_STORE_FILE: &str = "records.json";

// =============================================================================
// Concurrency Defaults
// =============================================================================

/// Upper bound on concurrently imported files
pub const MAX_IMPORT_WORKERS: usize = 8;
