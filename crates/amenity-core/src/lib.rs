//! # amenity-core
//!
//! The pure scheduling core behind amenity bookings: minute-of-day time
//! arithmetic, operating-hours resolution with per-weekday overrides, the
//! open-interval overlap test, free-slot computation, reservation status
//! transitions and hourly cost derivation.
//!
//! Everything here is synchronous and side-effect free — functions are pure
//! over the amenity, schedule set and reservation list they are handed.
//! Persistence and orchestration live in the `reservation-engine` crate.
//!
//! ## Modules
//!
//! - [`time`] — `"HH:MM"` parsing, formatting and minute arithmetic
//! - [`model`] — amenities, schedule overrides, reservations and their statuses
//! - [`hours`] — is an amenity open at a given weekday/time?
//! - [`slots`] — conflict detection and free-slot sweep
//! - [`cost`] — duration × hourly-rate charge with cent rounding
//! - [`error`] — error types

pub mod cost;
pub mod error;
pub mod hours;
pub mod model;
pub mod slots;
pub mod time;

pub use cost::reservation_cost;
pub use error::TimeError;
pub use hours::{effective_hours, is_open_at};
pub use model::{
    Amenity, AmenityCategory, AmenityReservation, AmenitySchedule, AmenityStatus,
    ReservationStatus,
};
pub use slots::{first_fitting_slot, free_slots, has_conflict, times_overlap, Slot};
pub use time::{duration_minutes, is_valid_time_range, TimeOfDay};
