//! Command-line argument definitions for warmte processor
//!
//! This module defines the complete CLI interface using the clap derive API.
//! The CLI plays the orchestration role only: it calls the import dispatcher,
//! the record store, and the aggregation engine in that order and owns all
//! user-facing messaging.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the heat-loss measurement processor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "warmte-processor",
    version,
    about = "Import heat-loss CSV exports and report energy-savings KPIs",
    long_about = "Imports loosely-structured heat-loss CSV exports, normalizes them into \
                  canonical measurement records, stores them durably, and derives summary \
                  KPIs (total loss, gas and cost savings, average loss per location). \
                  Imports are lenient: unrecognized columns and malformed cells degrade \
                  to documented defaults instead of failing the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the warmte processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import CSV measurement exports into the record store
    Import(ImportArgs),
    /// Show summary KPIs over all stored records
    Report(ReportArgs),
    /// Remove all stored records
    Wipe(WipeArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Files or directories to import
    ///
    /// Directories are scanned recursively for *.csv files. Files are handed
    /// to the importer claiming their extension; unclaimed files abort the
    /// run with an unsupported-format error.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Record store file (defaults to the user data directory)
    #[arg(short = 's', long = "store", value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Number of files to import concurrently
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Output format for the KPI summary
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Record store file (defaults to the user data directory)
    #[arg(short = 's', long = "store", value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the wipe command
#[derive(Debug, Clone, Parser)]
pub struct WipeArgs {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Record store file (defaults to the user data directory)
    #[arg(short = 's', long = "store", value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for the report command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary block
    Human,
    /// Pretty-printed JSON
    Json,
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.jobs {
            return Err(Error::configuration("--jobs must be at least 1"));
        }

        for path in &self.paths {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

impl ReportArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

impl WipeArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(5), "trace");
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let args = ImportArgs {
            paths: vec![],
            store: None,
            jobs: Some(0),
            verbose: 0,
        };
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_missing_input_path_rejected() {
        let args = ImportArgs {
            paths: vec![PathBuf::from("/definitely/not/here.csv")],
            store: None,
            jobs: None,
            verbose: 0,
        };
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_import_subcommand_parses() {
        let args = Args::parse_from([
            "warmte-processor",
            "import",
            "metingen.csv",
            "--store",
            "/tmp/records.json",
            "-j",
            "4",
            "-vv",
        ]);

        match args.command {
            Some(Commands::Import(import_args)) => {
                assert_eq!(import_args.paths, vec![PathBuf::from("metingen.csv")]);
                assert_eq!(import_args.jobs, Some(4));
                assert_eq!(import_args.get_log_level(), "debug");
            }
            other => panic!("Expected import command, got {:?}", other),
        }
    }

    #[test]
    fn test_report_format_defaults_to_human() {
        let args = Args::parse_from(["warmte-processor", "report"]);
        match args.command {
            Some(Commands::Report(report_args)) => {
                assert_eq!(report_args.format, OutputFormat::Human);
            }
            other => panic!("Expected report command, got {:?}", other),
        }
    }
}
