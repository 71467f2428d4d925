//! Wipe command: remove all stored records after confirmation

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

use super::shared;
use crate::app::adapters::store::{JsonFileStore, RecordStore};
use crate::cli::args::WipeArgs;
use crate::{Error, Result};

/// Execute the wipe command
pub async fn run_wipe(args: WipeArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    let config = shared::resolve_config(args.store.clone(), None)?;

    let store = JsonFileStore::new(config.store_path.clone());
    let record_count = store.fetch_all()?.len();

    if record_count == 0 {
        println!("{}", "Record store is already empty".yellow());
        return Ok(());
    }

    if !args.yes && !confirm_wipe(record_count)? {
        println!("Aborted, nothing removed");
        return Ok(());
    }

    store.wipe()?;
    info!("Wiped {} records", record_count);

    println!(
        "{} Removed {} records from {}",
        "✓".green(),
        record_count,
        config.store_path.display()
    );
    Ok(())
}

/// Ask the user to confirm the wipe; anything but an explicit yes declines
fn confirm_wipe(record_count: usize) -> Result<bool> {
    print!("Remove all {} stored records? [y/N] ", record_count);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush confirmation prompt", e))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| Error::io("Failed to read confirmation answer", e))?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
