//! Main entry point for the frontdesk CLI.
//!
//! This is the command-line interface for the frontdesk reservation
//! manager. The ledger is in-memory, so every invocation starts from an
//! empty manager. Commands:
//! - `run`: execute a scripted sequence of bookings against one manager
//! - `quote`: compute the price of a stay without booking it
//! - `demo`: walk through the built-in sample scenario

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = frontdesk::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        hotel: cli.hotel,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Quote(cmd) => cmd.execute(&global),
        cli::Command::Demo(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
