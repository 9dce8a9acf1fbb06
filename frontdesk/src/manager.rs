//! The reservation manager: the invariant-checking state container.
//!
//! [`ReservationManager`] owns all reservation state for a single hotel
//! and exposes three operations: [`book`](ReservationManager::book),
//! [`cancel`](ReservationManager::cancel), and
//! [`reservations`](ReservationManager::reservations). It enforces two
//! invariants: reservation ids are unique (and never reused), and no
//! client holds more than one active reservation at a time.
//!
//! The manager is single-threaded and synchronous. Callers that need
//! concurrent access must wrap the whole manager in one mutual-exclusion
//! boundary; the id counter, the booked-name set, and the active
//! collection must change atomically per call.

use std::collections::HashSet;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pricing::PricingPolicy;
use crate::{Client, Reservation, ReservationId};

/// Default hotel name used when none is configured.
pub const DEFAULT_HOTEL_NAME: &str = "Hotel Luchadores";

/// Manages the active reservations of a single hotel.
///
/// # Examples
///
/// ```
/// use frontdesk::{Client, ReservationManager};
///
/// let mut manager = ReservationManager::default();
/// let goku = Client::new("Goku", 30, 175).unwrap();
///
/// let reservation = manager.book(vec![goku.clone()], 2, true).unwrap();
/// assert_eq!(reservation.id().value(), 1);
/// assert!((reservation.price() - 50.0).abs() < f64::EPSILON);
///
/// // Goku is now booked; a second reservation for him is rejected.
/// assert!(manager.book(vec![goku], 1, false).is_err());
///
/// manager.cancel(reservation.id()).unwrap();
/// assert!(manager.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ReservationManager {
    hotel: String,
    policy: PricingPolicy,
    reservations: Vec<Reservation>,
    booked_names: HashSet<String>,
    next_id: u64,
}

impl ReservationManager {
    /// Creates a manager for the named hotel with the given pricing policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::{PricingPolicy, ReservationManager};
    ///
    /// let manager = ReservationManager::new("Hotel Luchadores", PricingPolicy::default());
    /// assert_eq!(manager.hotel(), "Hotel Luchadores");
    /// assert!(manager.is_empty());
    /// ```
    #[must_use]
    pub fn new(hotel: impl Into<String>, policy: PricingPolicy) -> Self {
        Self {
            hotel: hotel.into(),
            policy,
            reservations: Vec::new(),
            booked_names: HashSet::new(),
            next_id: ReservationId::FIRST.value(),
        }
    }

    /// Creates a manager from a resolved configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::config::ConfigBuilder;
    /// use frontdesk::ReservationManager;
    ///
    /// let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    /// let manager = ReservationManager::from_config(&config);
    /// assert_eq!(manager.hotel(), "Hotel Luchadores");
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hotel_name(), config.pricing_policy())
    }

    /// Returns the hotel name this manager books for.
    #[must_use]
    pub fn hotel(&self) -> &str {
        &self.hotel
    }

    /// Returns the pricing policy in effect.
    #[must_use]
    pub const fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Books a stay for the given guests.
    ///
    /// Assigns the next reservation id, computes the price from the
    /// pricing policy, and appends the reservation to the active
    /// collection. The id counter advances only when the whole operation
    /// succeeds, so a failed call never burns an id.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateId`] if an active reservation already carries
    ///   the freshly assigned id (defensive; unreachable under correct
    ///   sequential use).
    /// - [`Error::ClientAlreadyBooked`] if any guest already holds an
    ///   active reservation. Known quirk, kept from the original system:
    ///   guests are checked and their names inserted one at a time in
    ///   input order, so when a later guest conflicts, the names of
    ///   earlier guests from the same call stay in the booked-name set
    ///   even though no reservation was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::{Client, ReservationManager};
    ///
    /// let mut manager = ReservationManager::default();
    /// let vegeta = Client::new("Vegeta", 35, 165).unwrap();
    ///
    /// let reservation = manager.book(vec![vegeta], 3, false).unwrap();
    /// assert!((reservation.price() - 60.0).abs() < f64::EPSILON);
    /// ```
    pub fn book(
        &mut self,
        guests: Vec<Client>,
        nights: u32,
        breakfast: bool,
    ) -> Result<Reservation> {
        let id = ReservationId::new(self.next_id);
        let price = self.policy.quote(guests.len(), nights, breakfast);

        if self.reservations.iter().any(|r| r.id() == id) {
            return Err(Error::DuplicateId { id });
        }

        for guest in &guests {
            if self.booked_names.contains(guest.name()) {
                // Names inserted earlier in this loop are intentionally
                // left in place; see the method docs.
                return Err(Error::ClientAlreadyBooked {
                    name: guest.name().to_string(),
                });
            }
            self.booked_names.insert(guest.name().to_string());
        }

        let reservation =
            Reservation::new(id, self.hotel.clone(), guests, nights, price, breakfast);
        self.reservations.push(reservation.clone());
        self.next_id += 1;

        log::debug!(
            "booked reservation {id} for {} guest(s), {nights} night(s)",
            reservation.guests().len()
        );

        Ok(reservation)
    }

    /// Cancels the reservation with the given id.
    ///
    /// Removes the reservation from the active collection and frees every
    /// guest name on it for rebooking. The id is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if no active reservation has
    /// the given id; the manager state is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::{Client, ReservationId, ReservationManager};
    ///
    /// let mut manager = ReservationManager::default();
    /// let goku = Client::new("Goku", 30, 175).unwrap();
    /// let reservation = manager.book(vec![goku], 2, true).unwrap();
    ///
    /// manager.cancel(reservation.id()).unwrap();
    /// assert!(manager.cancel(ReservationId::new(999)).is_err());
    /// ```
    pub fn cancel(&mut self, id: ReservationId) -> Result<()> {
        let Some(index) = self.reservations.iter().position(|r| r.id() == id) else {
            return Err(Error::ReservationNotFound { id });
        };

        let removed = self.reservations.remove(index);
        for guest in removed.guests() {
            self.booked_names.remove(guest.name());
        }

        log::debug!("cancelled reservation {id}");

        Ok(())
    }

    /// Returns the active reservations in insertion order.
    ///
    /// Read-only; calling this twice with no intervening mutation yields
    /// equal sequences.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns `true` if the named client currently holds a booking.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::{Client, ReservationManager};
    ///
    /// let mut manager = ReservationManager::default();
    /// assert!(!manager.is_booked("Goku"));
    ///
    /// let goku = Client::new("Goku", 30, 175).unwrap();
    /// manager.book(vec![goku], 1, false).unwrap();
    /// assert!(manager.is_booked("Goku"));
    /// ```
    #[must_use]
    pub fn is_booked(&self, name: &str) -> bool {
        self.booked_names.contains(name)
    }

    /// Returns the number of active reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if there are no active reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new(DEFAULT_HOTEL_NAME, PricingPolicy::default())
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str) -> Client {
        Client::new(name, 30, 175).unwrap()
    }

    #[test]
    fn test_book_assigns_first_id() {
        let mut manager = ReservationManager::default();
        let reservation = manager.book(vec![client("Goku")], 2, true).unwrap();
        assert_eq!(reservation.id(), ReservationId::FIRST);
    }

    #[test]
    fn test_book_ids_strictly_increasing() {
        let mut manager = ReservationManager::default();
        let first = manager.book(vec![client("Goku")], 2, true).unwrap();
        let second = manager.book(vec![client("Vegeta")], 3, false).unwrap();
        assert!(first.id() < second.id());
        assert_eq!(second.id().value(), 2);
    }

    #[test]
    fn test_book_computes_price() {
        let mut manager = ReservationManager::default();
        let with_breakfast = manager.book(vec![client("Goku")], 2, true).unwrap();
        assert!((with_breakfast.price() - 50.0).abs() < f64::EPSILON);

        let without = manager.book(vec![client("Vegeta")], 3, false).unwrap();
        assert!((without.price() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_book_stamps_hotel_name() {
        let mut manager = ReservationManager::default();
        let reservation = manager.book(vec![client("Goku")], 1, false).unwrap();
        assert_eq!(reservation.hotel(), DEFAULT_HOTEL_NAME);
    }

    #[test]
    fn test_book_rejects_already_booked_client() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 2, true).unwrap();

        let result = manager.book(vec![client("Goku")], 1, true);
        assert!(matches!(
            result.unwrap_err(),
            Error::ClientAlreadyBooked { name } if name == "Goku"
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_failed_book_does_not_advance_id() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 2, true).unwrap();

        assert!(manager.book(vec![client("Goku")], 1, true).is_err());

        let next = manager.book(vec![client("Vegeta")], 1, true).unwrap();
        assert_eq!(next.id().value(), 2);
    }

    #[test]
    fn test_partial_insertion_quirk() {
        // A multi-guest booking that fails on the second guest leaves the
        // first guest's name in the booked set, matching the original
        // system's behavior.
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Vegeta")], 2, false).unwrap();

        let result = manager.book(vec![client("Goku"), client("Vegeta")], 1, true);
        assert!(result.is_err());
        assert_eq!(manager.len(), 1);
        assert!(manager.is_booked("Goku"));

        // Goku's leaked name now blocks a fresh booking for him.
        assert!(manager.book(vec![client("Goku")], 1, false).is_err());
    }

    #[test]
    fn test_conflict_on_first_guest_has_no_side_effects() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 2, true).unwrap();

        let result = manager.book(vec![client("Goku"), client("Vegeta")], 1, true);
        assert!(result.is_err());
        assert!(!manager.is_booked("Vegeta"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_cancel_removes_reservation_and_frees_names() {
        let mut manager = ReservationManager::default();
        let reservation = manager.book(vec![client("Goku")], 2, true).unwrap();

        manager.cancel(reservation.id()).unwrap();
        assert!(manager.is_empty());
        assert!(!manager.is_booked("Goku"));

        // Goku can be rebooked, under a fresh id.
        let rebooked = manager.book(vec![client("Goku")], 1, false).unwrap();
        assert_eq!(rebooked.id().value(), 2);
    }

    #[test]
    fn test_cancel_unknown_id() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 2, true).unwrap();

        let result = manager.cancel(ReservationId::new(999));
        assert!(matches!(
            result.unwrap_err(),
            Error::ReservationNotFound { id } if id.value() == 999
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_cancel_same_id_twice() {
        let mut manager = ReservationManager::default();
        let reservation = manager.book(vec![client("Goku")], 2, true).unwrap();

        manager.cancel(reservation.id()).unwrap();
        assert!(manager.cancel(reservation.id()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_ids_never_reused_after_cancel() {
        let mut manager = ReservationManager::default();
        let first = manager.book(vec![client("Goku")], 2, true).unwrap();
        manager.cancel(first.id()).unwrap();

        let second = manager.book(vec![client("Vegeta")], 1, false).unwrap();
        assert_ne!(second.id(), first.id());
        assert_eq!(second.id().value(), 2);
    }

    #[test]
    fn test_reservations_preserve_insertion_order() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 1, false).unwrap();
        manager.book(vec![client("Vegeta")], 1, false).unwrap();
        manager.book(vec![client("Piccolo")], 1, false).unwrap();
        manager.cancel(ReservationId::new(2)).unwrap();

        let ids: Vec<u64> = manager
            .reservations()
            .iter()
            .map(|r| r.id().value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 2, true).unwrap();
        manager.book(vec![client("Vegeta")], 3, false).unwrap();

        assert_eq!(manager.reservations(), manager.reservations());
    }

    #[test]
    fn test_price_independent_of_guest_identity() {
        let mut manager = ReservationManager::default();
        let first = manager.book(vec![client("Piccolo")], 3, true).unwrap();
        let second = manager.book(vec![client("Trunks")], 3, true).unwrap();
        assert!((first.price() - second.price()).abs() < f64::EPSILON);
        assert!((first.price() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_manager_usable_after_errors() {
        let mut manager = ReservationManager::default();
        manager.book(vec![client("Goku")], 2, true).unwrap();

        assert!(manager.book(vec![client("Goku")], 1, true).is_err());
        assert!(manager.cancel(ReservationId::new(999)).is_err());

        // Still fully operational.
        let reservation = manager.book(vec![client("Vegeta")], 1, false).unwrap();
        assert_eq!(reservation.id().value(), 2);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_custom_hotel_and_policy() {
        let mut manager = ReservationManager::new("Hotel Paradiso", PricingPolicy::new(10.0, 2.0));
        let reservation = manager.book(vec![client("Goku")], 2, true).unwrap();
        assert_eq!(reservation.hotel(), "Hotel Paradiso");
        assert!((reservation.price() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_nights_books_at_zero_price() {
        // Duration is not defensively validated; a zero-night stay just
        // prices to zero.
        let mut manager = ReservationManager::default();
        let reservation = manager.book(vec![client("Goku")], 0, true).unwrap();
        assert!(reservation.price().abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_guest_list_books() {
        // Nothing enforces non-emptiness; an empty booking reserves no
        // names and prices to zero.
        let mut manager = ReservationManager::default();
        let reservation = manager.book(vec![], 2, true).unwrap();
        assert!(reservation.guests().is_empty());
        assert!(reservation.price().abs() < f64::EPSILON);
        assert_eq!(manager.len(), 1);
    }
}
