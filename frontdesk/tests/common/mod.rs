//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the frontdesk library.

use frontdesk::{Client, PricingPolicy, ReservationManager};

/// Creates a client with default metadata.
#[allow(dead_code)]
pub fn client(name: &str) -> Client {
    Client::new(name, 30, 175).unwrap()
}

/// Builder for creating test managers with sensible defaults.
///
/// Defaults:
/// - hotel: "Hotel Luchadores"
/// - pricing: base 20.0, breakfast multiplier 1.25
/// - no pre-existing bookings
#[allow(dead_code)]
pub struct ManagerFixture {
    hotel: String,
    policy: PricingPolicy,
    booked: Vec<(Vec<Client>, u32, bool)>,
}

#[allow(dead_code)]
impl ManagerFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            hotel: "Hotel Luchadores".to_string(),
            policy: PricingPolicy::default(),
            booked: Vec::new(),
        }
    }

    /// Overrides the hotel name.
    pub fn with_hotel(mut self, hotel: &str) -> Self {
        self.hotel = hotel.to_string();
        self
    }

    /// Overrides the pricing policy.
    pub fn with_policy(mut self, policy: PricingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Queues a single-guest booking to be applied on build.
    pub fn with_booking(mut self, name: &str, nights: u32, breakfast: bool) -> Self {
        self.booked.push((vec![client(name)], nights, breakfast));
        self
    }

    /// Builds the manager, applying any queued bookings.
    pub fn build(self) -> ReservationManager {
        let mut manager = ReservationManager::new(self.hotel, self.policy);
        for (guests, nights, breakfast) in self.booked {
            manager
                .book(guests, nights, breakfast)
                .expect("fixture booking must succeed");
        }
        manager
    }
}
