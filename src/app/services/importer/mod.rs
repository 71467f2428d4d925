//! Import pipeline for loosely-structured heat-loss CSV exports
//!
//! This module turns raw measurement exports into canonical records. The
//! pipeline is deliberately lenient: column positions are discovered by
//! keyword heuristics, unparseable cells degrade to documented defaults,
//! and no row ever aborts an import.
//!
//! ## Architecture
//!
//! The importer is organized into logical components:
//! - [`dispatcher`] - Format dispatch over an open set of importers
//! - [`csv_file`] - CSV line splitting, header resolution, and row coercion
//! - [`column_map`] - Heuristic header-to-canonical-field resolution
//! - [`coercion`] - Locale-tolerant date and decimal parsing
//! - [`stats`] - Import statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use warmte_processor::app::services::importer::ImportDispatcher;
//!
//! # async fn example() -> warmte_processor::Result<()> {
//! let dispatcher = ImportDispatcher::with_default_importers();
//! let outcome = dispatcher.dispatch(std::path::Path::new("metingen.csv")).await?;
//!
//! println!(
//!     "Imported {} rows ({} defaults applied)",
//!     outcome.stats.rows_imported,
//!     outcome.stats.defaults_applied()
//! );
//! # Ok(())
//! # }
//! ```

pub mod coercion;
pub mod column_map;
pub mod csv_file;
pub mod dispatcher;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_map::{CanonicalField, ColumnMap};
pub use csv_file::CsvImporter;
pub use dispatcher::{ImportDispatcher, Importer};
pub use stats::{ImportOutcome, ImportStats};
