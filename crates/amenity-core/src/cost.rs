//! Charge derivation from booking duration and hourly rate.

use crate::model::Amenity;

/// Charge for using `amenity` for `duration_minutes`, rounded half-up to the
/// cent.
///
/// Complimentary amenities and amenities without an hourly rate cost 0
/// regardless of duration. For a fixed rate the result is monotonic
/// non-decreasing in duration.
pub fn reservation_cost(amenity: &Amenity, duration_minutes: i64) -> f64 {
    if amenity.is_complimentary {
        return 0.0;
    }
    let Some(rate) = amenity.price_per_hour else {
        return 0.0;
    };
    let raw = duration_minutes as f64 / 60.0 * rate;
    // f64::round is half-away-from-zero, which is half-up for the
    // non-negative charges produced here.
    (raw * 100.0).round() / 100.0
}
