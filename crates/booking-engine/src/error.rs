//! Error types for booking-engine boundary parsing and validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A time string was not a zero-padded 24-hour `HH:MM`.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// A date string was not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A request template broke one of its structural invariants.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;
