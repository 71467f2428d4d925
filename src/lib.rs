//! Warmte Processor Library
//!
//! A Rust library for importing loosely-structured heat-loss CSV exports and
//! turning them into canonical measurement records with summary KPIs.
//!
//! This library provides tools for:
//! - Heuristic CSV column detection against bilingual (Dutch/English) headers
//! - Locale-tolerant date and decimal parsing with documented defaults
//! - Format dispatch over an open set of importers
//! - Durable record storage with atomic append and wipe
//! - KPI aggregation over the stored record collection

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod importer;
    }
    pub mod adapters {
        pub mod store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{KpiSummary, Measurement};
pub use config::Config;

/// Result type alias for warmte processor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for import and storage operations
///
/// Note the deliberate absence of a parse-failure variant: malformed rows and
/// cells never abort an import, they degrade to documented default values.
/// Only format dispatch, file reading, and store I/O can fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed before parsing began
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No importer claims the given input
    #[error("Unsupported format for '{path}': {hint}")]
    UnsupportedFormat { path: String, hint: String },

    /// Record store append/fetch/wipe failed
    #[error("Record store error: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unsupported-format error with the standard remediation hint
    pub fn unsupported_format(path: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            path: path.into(),
            hint: constants::UNSUPPORTED_FORMAT_HINT.to_string(),
        }
    }

    /// Create a store error with context
    pub fn store(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a store error without an underlying cause
    pub fn store_message(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Store {
            message: "JSON serialization failed".to_string(),
            source: Some(Box::new(source)),
        }
    }
}
