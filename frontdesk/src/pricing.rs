//! Pricing rules for reservations.
//!
//! The price of a stay depends only on the guest count, the duration in
//! nights, and the breakfast option. Guest identity never affects it.

use serde::{Deserialize, Serialize};

/// Default base price per guest per night (currency-agnostic units).
pub const DEFAULT_BASE_PRICE_PER_GUEST: f64 = 20.0;

/// Default price multiplier applied when the breakfast option is selected.
pub const DEFAULT_BREAKFAST_MULTIPLIER: f64 = 1.25;

/// The pricing rule applied by the reservation manager.
///
/// # Examples
///
/// ```
/// use frontdesk::PricingPolicy;
///
/// let policy = PricingPolicy::default();
///
/// // 1 guest, 2 nights, with breakfast: 1 x 20.0 x 2 x 1.25
/// assert!((policy.quote(1, 2, true) - 50.0).abs() < f64::EPSILON);
///
/// // 1 guest, 3 nights, no breakfast: 1 x 20.0 x 3 x 1.0
/// assert!((policy.quote(1, 3, false) - 60.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Base price charged per guest per night.
    pub base_price_per_guest: f64,
    /// Multiplier applied to the total when breakfast is selected.
    pub breakfast_multiplier: f64,
}

impl PricingPolicy {
    /// Creates a pricing policy with explicit parameters.
    #[must_use]
    pub const fn new(base_price_per_guest: f64, breakfast_multiplier: f64) -> Self {
        Self {
            base_price_per_guest,
            breakfast_multiplier,
        }
    }

    /// Computes the total price for a stay.
    ///
    /// The formula is
    /// `guest_count x base_price_per_guest x nights x multiplier`, where
    /// the multiplier is [`breakfast_multiplier`](Self::breakfast_multiplier)
    /// when `breakfast` is set and `1.0` otherwise. Deterministic: equal
    /// inputs always yield equal prices.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::PricingPolicy;
    ///
    /// let policy = PricingPolicy::default();
    /// assert!((policy.quote(2, 3, false) - 120.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn quote(&self, guest_count: usize, nights: u32, breakfast: bool) -> f64 {
        let multiplier = if breakfast {
            self.breakfast_multiplier
        } else {
            1.0
        };
        guest_count as f64 * self.base_price_per_guest * f64::from(nights) * multiplier
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PRICE_PER_GUEST, DEFAULT_BREAKFAST_MULTIPLIER)
    }
}
