//! Report command: fetch stored records and print the KPI summary

use colored::Colorize;
use serde::Serialize;
use tracing::info;

use super::shared;
use crate::Result;
use crate::app::adapters::store::{JsonFileStore, RecordStore};
use crate::app::models::KpiSummary;
use crate::app::services::aggregation;
use crate::cli::args::{OutputFormat, ReportArgs};

/// JSON payload for the machine-readable report
#[derive(Debug, Serialize)]
struct ReportPayload {
    record_count: usize,
    kpis: KpiSummary,
}

/// Execute the report command
pub async fn run_report(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    let config = shared::resolve_config(args.store.clone(), None)?;

    let store = JsonFileStore::new(config.store_path.clone());
    let records = store.fetch_all()?;
    let kpis = aggregation::summarize(&records);

    info!("Summarized {} stored records", records.len());

    match args.format {
        OutputFormat::Json => {
            let payload = ReportPayload {
                record_count: records.len(),
                kpis,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => print_human_summary(records.len(), &kpis, &config),
    }

    Ok(())
}

fn print_human_summary(record_count: usize, kpis: &KpiSummary, config: &crate::Config) {
    println!("{}", "Heat-Loss KPI Summary".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Records:                  {}", record_count);
    println!("  Total heat loss:          {:.2} MJ", kpis.total_loss_mj);
    println!("  Total gas saved:          {:.2} m³", kpis.total_saved_m3);
    println!("  Total cost saved:         € {:.2}", kpis.total_saved_eur);
    println!(
        "  Avg loss per location:    {:.2} MJ",
        kpis.avg_loss_per_location_mj
    );
    println!("  Record store:             {}", config.store_path.display());

    if record_count == 0 {
        println!(
            "\n{}",
            "Store is empty — run `warmte-processor import` first".yellow()
        );
    }
}
