//! Quote command implementation.
//!
//! This module implements the `quote` command, which computes the price
//! of a stay from the configured pricing policy without touching any
//! reservation state.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};

/// Compute the price of a stay without booking it.
#[derive(Args)]
pub struct QuoteCommand {
    /// Number of guests
    #[arg(long, value_name = "COUNT")]
    pub guests: usize,

    /// Duration of the stay in nights
    #[arg(long, value_name = "NIGHTS")]
    pub nights: u32,

    /// Include the breakfast option
    #[arg(long)]
    pub breakfast: bool,
}

impl QuoteCommand {
    /// Execute the quote command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let policy = config.pricing_policy();

        let price = policy.quote(self.guests, self.nights, self.breakfast);
        println!("{price:.2}");

        Ok(())
    }
}
