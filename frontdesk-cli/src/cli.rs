//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{DemoCommand, QuoteCommand, RunCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing in-memory hotel reservations.
#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(version, about = "Manage in-memory hotel reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH", global = true, env = "FRONTDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the hotel name
    #[arg(long, value_name = "NAME", global = true, env = "FRONTDESK_HOTEL")]
    pub hotel: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Execute a booking script against a fresh manager
    Run(RunCommand),

    /// Compute the price of a stay without booking it
    Quote(QuoteCommand),

    /// Walk through the built-in sample scenario
    Demo(DemoCommand),
}
