use thiserror::Error;

use crate::domain::reservation::model::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};

/// Errors surfaced to the user while booking or cancelling.
///
/// None of these end the session; the front-end shows the message and
/// lets the user try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please fill all fields ({0} is empty).")]
    EmptyField(&'static str),

    #[error("Enter a valid time in HH:MM format (got '{0}').")]
    InvalidTime(String),

    #[error("Enter a valid email (example: name@gmail.com), got '{0}'.")]
    InvalidEmail(String),

    #[error(
        "Number of people must be between {} and {} (got {0}).",
        MIN_PARTY_SIZE,
        MAX_PARTY_SIZE
    )]
    InvalidPartySize(u32),

    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    #[error("No reservation found for {0}.")]
    NotFound(String),
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
