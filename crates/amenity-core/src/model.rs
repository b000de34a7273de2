//! Domain model: amenities, per-weekday schedule overrides, reservations.
//!
//! Statuses are closed enums with exhaustive matching — an invalid status or
//! weekday cannot be constructed, so the transition logic never sees one.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::TimeOfDay;

/// A bookable resort facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub category: AmenityCategory,
    pub location: String,
    /// Maximum concurrent party size; `None` means unlimited.
    pub capacity: Option<u32>,
    /// Default operating hours, used for any weekday without an override.
    /// Invariant: `opening_time < closing_time` (no overnight wraparound).
    pub opening_time: TimeOfDay,
    pub closing_time: TimeOfDay,
    pub requires_reservation: bool,
    /// Hourly rate in the resort currency; `None` means no charge applies.
    pub price_per_hour: Option<f64>,
    pub is_complimentary: bool,
    pub status: AmenityStatus,
    pub is_active: bool,
    pub rules: Option<String>,
    pub images: Vec<String>,
}

impl Amenity {
    /// An amenity accepts bookings only while it is active and operational.
    /// Maintenance, closure or a facility-wide hold all make the operating
    /// hours irrelevant.
    pub fn is_bookable(&self) -> bool {
        self.is_active && self.status == AmenityStatus::Available
    }
}

/// Facility category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityCategory {
    Pool,
    Spa,
    Fitness,
    Sports,
    Dining,
    Entertainment,
    Other,
}

/// Operational status of the facility itself, independent of bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityStatus {
    Available,
    Maintenance,
    Closed,
    Reserved,
}

/// A per-weekday override of an amenity's default operating hours.
///
/// The owning amenity holds at most one entry per weekday; a weekday with no
/// entry falls back to the amenity defaults. Invariant: unless `is_closed`,
/// `opening_time < closing_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenitySchedule {
    pub amenity_id: Uuid,
    pub day_of_week: Weekday,
    pub opening_time: TimeOfDay,
    pub closing_time: TimeOfDay,
    /// When set, the amenity is closed all day regardless of the times above.
    pub is_closed: bool,
}

/// A single booking against an amenity on a specific calendar date.
///
/// Reservations are never deleted — cancellation is a status, not removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityReservation {
    pub id: Uuid,
    pub amenity_id: Uuid,
    pub guest_id: Uuid,
    pub guest_name: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub party_size: u32,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reservation lifecycle status.
///
/// Legal transitions:
///
/// ```text
/// pending ──► confirmed ──► completed
///    │            ├───────► cancelled
///    │            └───────► no_show
///    └──► cancelled
/// ```
///
/// `completed`, `cancelled` and `no_show` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Terminal statuses permit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ReservationStatus::Completed | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    /// Whether a reservation in this status still occupies its time slot.
    ///
    /// Cancelled and no-show reservations free their interval for overlap
    /// checks and slot computation; completed ones keep blocking it (the
    /// interval genuinely was in use).
    pub fn blocks_slot(self) -> bool {
        !matches!(
            self,
            ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    /// The full transition table. Completion and no-show must pass through
    /// `confirmed`; nothing leaves a terminal status.
    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
        )
    }
}
