//! Run command implementation.
//!
//! This module implements the `run` command, which executes a YAML
//! booking script against a single fresh manager. Scripts are a list of
//! actions, executed in order:
//!
//! ```yaml
//! - book:
//!     guests:
//!       - { name: Goku, age: 30, height_cm: 175 }
//!     nights: 2
//!     breakfast: true
//! - cancel:
//!     id: 1
//! - list
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Deserialize;

use frontdesk::{Client, Error, ReservationId};

use crate::error::CliError;
use crate::utils::{build_manager, print_json, print_table, GlobalOptions};

/// Execute a booking script against a fresh manager.
#[derive(Args)]
pub struct RunCommand {
    /// Path to the YAML script
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Output format for list actions
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "FRONTDESK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Stop at the first failed action instead of continuing
    #[arg(long)]
    pub strict: bool,
}

/// Output format for the run command's list actions.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

/// One guest as written in a script.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuestEntry {
    /// Guest name (the booking key).
    pub name: String,
    /// Guest age in years.
    #[serde(default)]
    pub age: u32,
    /// Guest height in centimeters.
    #[serde(default)]
    pub height_cm: u32,
}

impl GuestEntry {
    fn into_client(self) -> Result<Client, Error> {
        Client::new(self.name, self.age, self.height_cm).map_err(Error::from)
    }
}

/// One action in a booking script.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    /// Book a stay for the listed guests.
    Book {
        /// Guests covered by the booking.
        guests: Vec<GuestEntry>,
        /// Duration of the stay in nights.
        nights: u32,
        /// Whether the breakfast option is selected.
        #[serde(default)]
        breakfast: bool,
    },
    /// Cancel the reservation with the given id.
    Cancel {
        /// The reservation id to cancel.
        id: u64,
    },
    /// Print the active reservations.
    List,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse the script
        let contents = fs::read_to_string(&self.script)?;
        let actions: Vec<ScriptAction> = serde_yaml::from_str(&contents)
            .map_err(|e| CliError::InvalidArguments(format!("invalid script: {e}")))?;

        // 2. Build a fresh manager from configuration
        let mut manager = build_manager(global)?;

        // 3. Execute actions in order
        let mut failures = 0usize;
        for (index, action) in actions.into_iter().enumerate() {
            let outcome = self.apply(&mut manager, action);
            if let Err(e) = outcome {
                if self.strict {
                    return Err(CliError::SemanticFailure(format!(
                        "action {} failed: {e}",
                        index + 1
                    )));
                }
                failures += 1;
                eprintln!("action {} failed: {e}", index + 1);
            }
        }

        if !global.quiet {
            eprintln!(
                "{} action(s) failed; {} reservation(s) active",
                failures,
                manager.len()
            );
        }

        Ok(())
    }

    /// Apply one script action to the manager.
    fn apply(
        &self,
        manager: &mut frontdesk::ReservationManager,
        action: ScriptAction,
    ) -> Result<(), CliError> {
        match action {
            ScriptAction::Book {
                guests,
                nights,
                breakfast,
            } => {
                let guests = guests
                    .into_iter()
                    .map(GuestEntry::into_client)
                    .collect::<Result<Vec<_>, _>>()?;
                let reservation = manager.book(guests, nights, breakfast)?;
                println!(
                    "booked reservation {} ({} guest(s), {} night(s), price {:.2})",
                    reservation.id(),
                    reservation.guests().len(),
                    reservation.nights(),
                    reservation.price()
                );
                Ok(())
            }
            ScriptAction::Cancel { id } => {
                let id = ReservationId::new(id);
                manager.cancel(id)?;
                println!("cancelled reservation {id}");
                Ok(())
            }
            ScriptAction::List => {
                match self.format {
                    OutputFormat::Table => print_table(manager.reservations()),
                    OutputFormat::Json => print_json(manager.reservations())?,
                }
                Ok(())
            }
        }
    }
}
