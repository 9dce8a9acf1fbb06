//! Error types for the frontdesk library.
//!
//! This module provides the error hierarchy for reservation operations,
//! using `thiserror` for ergonomic error handling. Every operation error
//! is returned synchronously to the immediate caller; nothing is logged,
//! swallowed, or retried inside the library.

use thiserror::Error;

use crate::ReservationId;

/// Result type alias for operations that may fail with a frontdesk error.
///
/// # Examples
///
/// ```
/// use frontdesk::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the frontdesk library.
///
/// The three booking errors (`DuplicateId`, `ClientAlreadyBooked`,
/// `ReservationNotFound`) are ordinary expected outcomes the caller
/// handles by branching; none of them leaves the manager unusable.
#[derive(Debug, Error)]
pub enum Error {
    /// An active reservation already carries the freshly assigned id.
    ///
    /// Defensive: unreachable under correct sequential id assignment,
    /// but kept as a distinct failure path.
    #[error("duplicate reservation id {id}")]
    DuplicateId {
        /// The colliding id.
        id: ReservationId,
    },

    /// A requested client already holds an active reservation.
    #[error("client '{name}' already has an active reservation")]
    ClientAlreadyBooked {
        /// The name of the already-booked client.
        name: String,
    },

    /// A cancellation referenced an id with no matching active reservation.
    #[error("reservation {id} not found")]
    ReservationNotFound {
        /// The id that was not found.
        id: ReservationId,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::client::ValidationError> for Error {
    fn from(err: crate::client::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::{Error, ReservationId};
    ///
    /// let err = Error::ReservationNotFound { id: ReservationId::new(999) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReservationNotFound { .. })
    }

    /// Check if error is a booking conflict (duplicate id or double booking).
    ///
    /// # Examples
    ///
    /// ```
    /// use frontdesk::Error;
    ///
    /// let err = Error::ClientAlreadyBooked { name: "Goku".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId { .. } | Self::ClientAlreadyBooked { .. }
        )
    }
}
