//! Import command: dispatch input files and append results to the store
//!
//! Files are ingested concurrently up to the configured worker bound; each
//! file is parsed whole by one task and appended to the store as one atomic
//! batch. The first unsupported-format or store error aborts the run after
//! progress reporting.

use colored::Colorize;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use walkdir::WalkDir;

use super::shared;
use crate::app::adapters::store::{JsonFileStore, RecordStore};
use crate::app::services::importer::ImportDispatcher;
use crate::cli::args::ImportArgs;
use crate::constants::CSV_EXTENSION;
use crate::{Error, Result};

/// Execute the import command
pub async fn run_import(args: ImportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;
    let config = shared::resolve_config(args.store.clone(), args.jobs)?;

    let files = collect_input_files(&args.paths)?;
    if files.is_empty() {
        println!("{}", "No CSV files found under the given paths".yellow());
        return Ok(());
    }

    info!(
        "Importing {} files with up to {} workers",
        files.len(),
        config.max_concurrent_imports
    );

    let store = JsonFileStore::new(config.store_path.clone());
    let dispatcher = ImportDispatcher::with_default_importers();

    let started = Instant::now();
    let progress = shared::create_progress_bar(files.len() as u64, "importing")?;

    let mut outcomes = stream::iter(files.iter().map(|path| {
        let dispatcher = &dispatcher;
        async move { (path, dispatcher.dispatch(path).await) }
    }))
    .buffer_unordered(config.max_concurrent_imports);

    let mut files_imported = 0usize;
    let mut records_appended = 0usize;
    let mut defaults_applied = 0usize;

    while let Some((path, result)) = outcomes.next().await {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        // One atomic batch per file: all of its rows become visible together.
        if let Err(e) = store.append(&outcome.records) {
            progress.abandon();
            return Err(e);
        }

        files_imported += 1;
        records_appended += outcome.records.len();
        defaults_applied += outcome.stats.defaults_applied();

        progress.println(format!(
            "  {} {} ({} rows, {} defaults)",
            "✓".green(),
            path.display(),
            outcome.stats.rows_imported,
            outcome.stats.defaults_applied()
        ));
        progress.inc(1);
    }

    progress.finish_and_clear();

    println!("\n{}", "Import complete".green().bold());
    println!("  Files imported:   {}", files_imported);
    println!("  Records appended: {}", records_appended);
    println!("  Defaults applied: {}", defaults_applied);
    println!("  Record store:     {}", config.store_path.display());
    println!(
        "  Elapsed:          {}",
        indicatif::HumanDuration(started.elapsed())
    );

    Ok(())
}

/// Expand input paths into the list of files to dispatch
///
/// Directories are scanned recursively for `*.csv`; plain files are passed
/// through untouched so the dispatcher can reject unsupported ones. The list
/// is sorted for deterministic run order.
fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path) {
                let entry = entry.map_err(|e| {
                    let message = format!("Failed to scan directory {}", path.display());
                    match e.into_io_error() {
                        Some(io) => Error::io(message, io),
                        None => Error::configuration(message),
                    }
                })?;

                if entry.file_type().is_file() && has_csv_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(CSV_EXTENSION))
}
