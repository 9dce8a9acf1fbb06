//! Reservation types for tracking hotel bookings.
//!
//! This module provides the [`ReservationId`] identifier and the
//! immutable [`Reservation`] record produced by the manager.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Client;

/// A unique identifier for a reservation.
///
/// Identifiers are assigned by the manager starting at 1 and strictly
/// increase across the life of the process. An id is never reused, even
/// after its reservation has been cancelled.
///
/// # Examples
///
/// ```
/// use frontdesk::ReservationId;
///
/// let id = ReservationId::new(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(format!("{id}"), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// The first identifier the manager ever assigns.
    pub const FIRST: Self = Self(1);

    /// Creates a reservation id from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ReservationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable booking record.
///
/// Reservations are created only by
/// [`ReservationManager::book`](crate::ReservationManager::book), which
/// assigns the id and computes the price, and removed only by
/// [`ReservationManager::cancel`](crate::ReservationManager::cancel).
/// No operation mutates an existing reservation in place.
///
/// # Examples
///
/// ```
/// use frontdesk::{Client, ReservationManager};
///
/// let mut manager = ReservationManager::default();
/// let guest = Client::new("Goku", 30, 175).unwrap();
/// let reservation = manager.book(vec![guest], 2, true).unwrap();
///
/// assert_eq!(reservation.id().value(), 1);
/// assert_eq!(reservation.nights(), 2);
/// assert!(reservation.breakfast());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    hotel: String,
    guests: Vec<Client>,
    nights: u32,
    price: f64,
    breakfast: bool,
}

impl Reservation {
    /// Assembles a reservation record. Only the manager constructs these.
    pub(crate) fn new(
        id: ReservationId,
        hotel: String,
        guests: Vec<Client>,
        nights: u32,
        price: f64,
        breakfast: bool,
    ) -> Self {
        Self {
            id,
            hotel,
            guests,
            nights,
            price,
            breakfast,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the hotel name.
    #[must_use]
    pub fn hotel(&self) -> &str {
        &self.hotel
    }

    /// Returns the guests covered by this reservation, in booking order.
    #[must_use]
    pub fn guests(&self) -> &[Client] {
        &self.guests
    }

    /// Returns the duration of the stay in nights.
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.nights
    }

    /// Returns the total price computed at booking time.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns whether the breakfast option was selected.
    #[must_use]
    pub const fn breakfast(&self) -> bool {
        self.breakfast
    }

    /// Returns `true` if any guest on this reservation has the given name.
    #[must_use]
    pub fn includes_guest(&self, name: &str) -> bool {
        self.guests.iter().any(|c| c.name() == name)
    }
}
