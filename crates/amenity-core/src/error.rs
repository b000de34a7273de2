//! Error types for the pure scheduling core.

use thiserror::Error;

/// Errors produced when constructing or parsing a [`crate::TimeOfDay`].
///
/// The original service silently coerced malformed `"HH:MM"` halves to 0,
/// turning garbage like `"25:99"` into midnight. Here malformed input is
/// rejected instead, so bad data surfaces at the boundary rather than as a
/// phantom booking time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The string was not of the form `"HH:MM"`.
    #[error("malformed time of day {0:?}: expected \"HH:MM\"")]
    Malformed(String),

    /// Hours or minutes were outside their valid range.
    /// `24:00` is accepted as the exclusive end-of-day sentinel.
    #[error("time of day out of range: {hours:02}:{minutes:02}")]
    OutOfRange { hours: u8, minutes: u8 },
}

/// Convenience alias used throughout amenity-core.
pub type Result<T> = std::result::Result<T, TimeError>;
