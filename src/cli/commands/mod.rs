//! Command implementations for the warmte processor CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and user-facing messaging. Each command is implemented in its own module:
//! - `import`: dispatch input files and append the results to the store
//! - `report`: fetch stored records and print the KPI summary
//! - `wipe`: remove all stored records after confirmation

pub mod import;
pub mod report;
pub mod shared;
pub mod wipe;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner, dispatching to the subcommand handlers
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Import(import_args) => import::run_import(import_args).await,
        Commands::Report(report_args) => report::run_report(report_args).await,
        Commands::Wipe(wipe_args) => wipe::run_wipe(wipe_args).await,
    }
}
