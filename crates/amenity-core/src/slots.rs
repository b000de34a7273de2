//! Conflict detection and free-slot computation.
//!
//! Sorts the blocking reservations of one amenity-day by start time, then
//! sweeps left to right emitting the gaps within the operating window.
//! Touching intervals (one ends exactly when the next starts) are NOT
//! conflicts.

use serde::{Deserialize, Serialize};

use crate::model::AmenityReservation;
use crate::time::{duration_minutes, TimeOfDay};

/// A contiguous free interval within an amenity's operating window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub duration_minutes: i64,
}

impl Slot {
    fn new(start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Slot {
            start_time,
            end_time,
            duration_minutes: duration_minutes(start_time, end_time),
        }
    }
}

/// Open-interval overlap test: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && e1 > s2`. Symmetric; adjacent intervals where `e1 == s2`
/// do not overlap.
pub fn times_overlap(s1: TimeOfDay, e1: TimeOfDay, s2: TimeOfDay, e2: TimeOfDay) -> bool {
    s1 < e2 && e1 > s2
}

/// Does the candidate interval collide with any reservation still occupying
/// its slot? Cancelled and no-show reservations never count.
pub fn has_conflict(
    start: TimeOfDay,
    end: TimeOfDay,
    reservations: &[AmenityReservation],
) -> bool {
    reservations
        .iter()
        .filter(|r| r.status.blocks_slot())
        .any(|r| times_overlap(start, end, r.start_time, r.end_time))
}

/// Compute the free intervals between `opening` and `closing` left over by
/// the given reservations.
///
/// Cancelled and no-show reservations are discarded; the rest are sorted by
/// start time and swept with a cursor that starts at `opening`, emits a slot
/// for every gap, and always advances to `max(cursor, reservation end)` so
/// overlapping bookings cannot drag it backwards. A trailing slot covers
/// whatever remains before `closing`.
///
/// The result is sorted, pairwise disjoint, and confined to
/// `[opening, closing]`. With no blocking reservations it is exactly one slot
/// spanning the whole window.
pub fn free_slots(
    opening: TimeOfDay,
    closing: TimeOfDay,
    reservations: &[AmenityReservation],
) -> Vec<Slot> {
    let mut busy: Vec<(u16, u16)> = reservations
        .iter()
        .filter(|r| r.status.blocks_slot())
        .map(|r| (r.start_time.to_minutes(), r.end_time.to_minutes()))
        .collect();
    busy.sort_unstable();

    let mut slots = Vec::new();
    let mut cursor = opening.to_minutes();
    let close = closing.to_minutes();

    for (busy_start, busy_end) in busy {
        // Clip to the window; a reservation past closing still ends the sweep.
        let gap_end = busy_start.min(close);
        if cursor < gap_end {
            slots.push(Slot::new(
                TimeOfDay::from_minutes(cursor),
                TimeOfDay::from_minutes(gap_end),
            ));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing slot after the last reservation.
    if cursor < close {
        slots.push(Slot::new(
            TimeOfDay::from_minutes(cursor),
            TimeOfDay::from_minutes(close),
        ));
    }

    slots
}

/// The first free slot of at least `min_duration_minutes`, if any.
pub fn first_fitting_slot(
    opening: TimeOfDay,
    closing: TimeOfDay,
    reservations: &[AmenityReservation],
    min_duration_minutes: i64,
) -> Option<Slot> {
    free_slots(opening, closing, reservations)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}
