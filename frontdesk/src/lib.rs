#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # frontdesk
//!
//! A library for managing in-memory hotel reservations.
//!
//! The [`ReservationManager`] owns all reservation state for a single
//! hotel and enforces two invariants: reservation ids are unique and
//! never reused, and no client holds more than one active reservation.
//!
//! ## Core Types
//!
//! - [`Client`]: a guest, identified by name
//! - [`Reservation`] and [`ReservationId`]: immutable booking records
//! - [`ReservationManager`]: the invariant-checking state container
//! - [`PricingPolicy`]: the deterministic pricing rule
//! - [`Error`] and [`Result`]: error handling types
//! - [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use frontdesk::{Client, ReservationManager};
//!
//! let mut manager = ReservationManager::default();
//!
//! let goku = Client::new("Goku", 30, 175).unwrap();
//! let reservation = manager.book(vec![goku], 2, true).unwrap();
//! assert_eq!(reservation.id().value(), 1);
//! assert!((reservation.price() - 50.0).abs() < f64::EPSILON);
//!
//! manager.cancel(reservation.id()).unwrap();
//! assert!(manager.is_empty());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod pricing;
pub mod reservation;

// Re-export key types at crate root for convenience
pub use client::{Client, ValidationError};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use manager::{ReservationManager, DEFAULT_HOTEL_NAME};
pub use pricing::PricingPolicy;
pub use reservation::{Reservation, ReservationId};
