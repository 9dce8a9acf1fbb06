//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands, including configuration loading, manager construction,
//! and output formatting.

use std::path::PathBuf;

use frontdesk::config::ConfigBuilder;
use frontdesk::{Config, Reservation, ReservationManager};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path to a configuration file.
    pub config: Option<PathBuf>,

    /// Override the hotel name.
    pub hotel: Option<String>,
}

/// Load configuration, honoring global overrides.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_path(path);
    }

    if let Some(ref hotel) = global.hotel {
        builder = builder.with_config(Config {
            hotel: Some(hotel.clone()),
            ..Default::default()
        });
    }

    builder.build().map_err(CliError::from)
}

/// Construct a fresh manager from the resolved configuration.
pub fn build_manager(global: &GlobalOptions) -> Result<ReservationManager, CliError> {
    let config = load_configuration(global)?;
    Ok(ReservationManager::from_config(&config))
}

/// Column headers for the reservation table.
const COLUMN_HEADERS: [&str; 6] = ["id", "hotel", "guests", "nights", "breakfast", "price"];

/// Print reservations as a human-readable tab-separated table.
pub fn print_table(reservations: &[Reservation]) {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    println!("{header_line}");

    for reservation in reservations {
        let guests = reservation
            .guests()
            .iter()
            .map(|c| c.name().to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{}\t{}\t{}\t{}\t{}\t{:.2}",
            reservation.id(),
            reservation.hotel(),
            guests,
            reservation.nights(),
            reservation.breakfast(),
            reservation.price()
        );
    }
}

/// Print reservations as pretty JSON.
pub fn print_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(reservations)
        .map_err(|e| CliError::InvalidArguments(format!("failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}
