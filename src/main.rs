use clap::Parser;
use std::process;
use warmte_processor::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(command)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Warmte Processor - Heat-Loss Measurement Importer");
    println!("=================================================");
    println!();
    println!("Import loosely-structured heat-loss CSV exports, normalize them into");
    println!("canonical measurement records, and report energy-savings KPIs.");
    println!();
    println!("USAGE:");
    println!("    warmte-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import CSV measurement exports into the record store");
    println!("    report      Show summary KPIs over all stored records");
    println!("    wipe        Remove all stored records");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import one export and a directory of exports:");
    println!("    warmte-processor import metingen.csv exports/");
    println!();
    println!("    # Show the KPI summary as JSON:");
    println!("    warmte-processor report --format json");
    println!();
    println!("    # Reset the record store without a prompt:");
    println!("    warmte-processor wipe --yes");
    println!();
    println!("For detailed help on any command, use:");
    println!("    warmte-processor <COMMAND> --help");
}
