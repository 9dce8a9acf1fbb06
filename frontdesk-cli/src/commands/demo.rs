//! Demo command implementation.
//!
//! This module implements the `demo` command, a scripted walkthrough of
//! the manager's behavior using the sample guests: two bookings, a
//! rejected double booking, a cancellation, a failed cancellation, and
//! an equal-price comparison.

use clap::Args;

use frontdesk::{Client, ReservationId};

use crate::error::CliError;
use crate::utils::{build_manager, print_table, GlobalOptions};

/// Walk through the built-in sample scenario.
#[derive(Args)]
pub struct DemoCommand {}

impl DemoCommand {
    /// Execute the demo command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut manager = build_manager(global)?;

        let goku = Client::new("Goku", 30, 175).map_err(frontdesk::Error::from)?;
        let vegeta = Client::new("Vegeta", 35, 165).map_err(frontdesk::Error::from)?;
        let piccolo = Client::new("Piccolo", 40, 200).map_err(frontdesk::Error::from)?;
        let trunks = Client::new("Trunks", 20, 170).map_err(frontdesk::Error::from)?;

        // Two successful bookings.
        let first = manager.book(vec![goku.clone()], 2, true)?;
        println!(
            "booked reservation {} for {} (price {:.2})",
            first.id(),
            goku,
            first.price()
        );

        let second = manager.book(vec![vegeta.clone()], 3, false)?;
        println!(
            "booked reservation {} for {} (price {:.2})",
            second.id(),
            vegeta,
            second.price()
        );

        // Goku already holds a reservation.
        match manager.book(vec![goku.clone()], 1, true) {
            Err(e) => println!("rejected as expected: {e}"),
            Ok(_) => {
                return Err(CliError::SemanticFailure(
                    "double booking was not rejected".to_string(),
                ))
            }
        }

        // Cancel the first reservation; Goku becomes bookable again.
        manager.cancel(first.id())?;
        println!("cancelled reservation {}", first.id());

        // Cancelling an id that was never issued fails.
        match manager.cancel(ReservationId::new(999)) {
            Err(e) => println!("rejected as expected: {e}"),
            Ok(()) => {
                return Err(CliError::SemanticFailure(
                    "cancelling an unknown id did not fail".to_string(),
                ))
            }
        }

        // Equal stays price the same regardless of guest identity.
        let a = manager.book(vec![piccolo], 3, true)?;
        let b = manager.book(vec![trunks], 3, true)?;
        println!(
            "equal stays priced {:.2} and {:.2}",
            a.price(),
            b.price()
        );
        if (a.price() - b.price()).abs() > f64::EPSILON {
            return Err(CliError::SemanticFailure(
                "equal stays priced differently".to_string(),
            ));
        }

        println!();
        print_table(manager.reservations());

        Ok(())
    }
}
