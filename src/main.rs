use clap::Parser;
use rutina::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Rutina - Workout Routine Sheet Processor");
    println!("========================================");
    println!();
    println!("Import hand-edited workout routine spreadsheets from Google Sheets,");
    println!("group them by training day, and track training stats over time.");
    println!();
    println!("USAGE:");
    println!("    rutina <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import a routine sheet from a link or local CSV file");
    println!("    refresh     Re-fetch a saved routine and refresh the cached copy");
    println!("    list        List saved routines");
    println!("    show        Show a saved routine grouped by day");
    println!("    remove      Remove a saved routine");
    println!("    stats       Track numeric training stats");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a routine from a Google Sheets share link:");
    println!("    rutina import \"https://docs.google.com/spreadsheets/d/<id>/edit\" --name Fuerza");
    println!();
    println!("    # Show Monday's exercises:");
    println!("    rutina show <ID> --day Lunes");
    println!();
    println!("    # Track body weight:");
    println!("    rutina stats add \"Peso corporal\" --unit kg --value 80");
    println!("    rutina stats log <ID> 79.5");
    println!();
    println!("For detailed help on any command, use:");
    println!("    rutina <COMMAND> --help");
}
