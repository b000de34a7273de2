//! Operating-hours resolution.
//!
//! A weekday either has a schedule override (which may mark the day fully
//! closed) or falls back to the amenity's default hours. Both comparisons use
//! the half-open interval `[opening, closing)` — the closing minute itself is
//! not open.
//!
//! These functions are pure and re-evaluated on every call; schedules and
//! amenity status can change between calls, so nothing here is cached.

use chrono::Weekday;

use crate::model::{Amenity, AmenitySchedule};
use crate::time::TimeOfDay;

/// The operating window effective on a given weekday, or `None` when an
/// override marks the day closed.
pub fn effective_hours(
    amenity: &Amenity,
    schedules: &[AmenitySchedule],
    day: Weekday,
) -> Option<(TimeOfDay, TimeOfDay)> {
    match schedules.iter().find(|s| s.day_of_week == day) {
        Some(entry) if entry.is_closed => None,
        Some(entry) => Some((entry.opening_time, entry.closing_time)),
        None => Some((amenity.opening_time, amenity.closing_time)),
    }
}

/// Is the amenity open for business at `at` on weekday `day`?
///
/// An inactive or non-available amenity is closed no matter the hour. The
/// schedule set should be the one owned by `amenity`; entries for other
/// amenities are indistinguishable here and will be matched by weekday alone.
pub fn is_open_at(
    amenity: &Amenity,
    schedules: &[AmenitySchedule],
    day: Weekday,
    at: TimeOfDay,
) -> bool {
    if !amenity.is_bookable() {
        return false;
    }
    match effective_hours(amenity, schedules, day) {
        Some((opening, closing)) => at >= opening && at < closing,
        None => false,
    }
}
