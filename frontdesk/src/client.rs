//! Client types for identifying hotel guests.
//!
//! This module provides the [`Client`] value type used in bookings.
//! Clients are identified by name alone: the reservation manager treats
//! two clients with the same name as the same person.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hotel guest.
///
/// The name acts as the unique booking key; age and height are carried
/// as descriptive metadata and never participate in any check.
///
/// # Examples
///
/// ```
/// use frontdesk::Client;
///
/// let client = Client::new("Goku", 30, 175).unwrap();
/// assert_eq!(client.name(), "Goku");
/// assert_eq!(client.age(), 30);
/// assert_eq!(client.height_cm(), 175);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    name: String,
    age: u32,
    height_cm: u32,
}

impl Client {
    /// Creates a new client.
    ///
    /// The name is trimmed of leading/trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::Client;
    ///
    /// // Valid client
    /// let client = Client::new("Vegeta", 35, 165);
    /// assert!(client.is_ok());
    ///
    /// // Invalid: empty name
    /// assert!(Client::new("", 35, 165).is_err());
    ///
    /// // Invalid: whitespace-only name
    /// assert!(Client::new("   ", 35, 165).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        age: u32,
        height_cm: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            name: trimmed.to_string(),
            age,
            height_cm,
        })
    }

    /// Returns the client's name (the booking key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client's age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the client's height in centimeters.
    #[must_use]
    pub const fn height_cm(&self) -> u32 {
        self.height_cm
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
