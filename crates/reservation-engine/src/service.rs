//! The reservation service: every lifecycle operation, built on the pure
//! algorithms in `amenity-core` and an injected repository and clock.
//!
//! Construction is explicit — the service is a plain struct holding its
//! collaborators, created once and shared by reference. There is no hidden
//! module-level state; every method is a function of its arguments plus
//! whatever the repository currently holds.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use amenity_core::cost::reservation_cost;
use amenity_core::hours::{effective_hours, is_open_at};
use amenity_core::model::{Amenity, AmenityReservation, AmenitySchedule, ReservationStatus};
use amenity_core::slots::{free_slots, has_conflict, Slot};
use amenity_core::time::{duration_minutes, is_valid_time_range, TimeOfDay};

use crate::clock::{Clock, SystemClock};
use crate::error::{EngineError, Result};
use crate::repository::AmenityRepository;

/// Input for a new booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    pub amenity_id: Uuid,
    pub guest_id: Uuid,
    pub guest_name: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub party_size: u32,
    pub notes: Option<String>,
}

/// Orchestrates amenity reservations against a repository collaborator.
pub struct ReservationService<R, C = SystemClock> {
    repository: R,
    clock: C,
}

impl<R: AmenityRepository> ReservationService<R, SystemClock> {
    /// Build a service on the real wall clock.
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R: AmenityRepository, C: Clock> ReservationService<R, C> {
    /// Build a service with an explicit time source (tests inject a fixed one).
    pub fn with_clock(repository: R, clock: C) -> Self {
        ReservationService { repository, clock }
    }

    async fn require_amenity(&self, id: Uuid) -> Result<Amenity> {
        self.repository
            .amenity_by_id(id)
            .await?
            .ok_or(EngineError::AmenityNotFound(id))
    }

    async fn require_reservation(&self, id: Uuid) -> Result<AmenityReservation> {
        self.repository
            .reservation_by_id(id)
            .await?
            .ok_or(EngineError::ReservationNotFound(id))
    }

    /// Create a reservation in `pending` status.
    ///
    /// Preconditions are checked in a fixed order and the first violation
    /// wins: amenity exists; amenity is bookable; the time range is valid;
    /// the guest name is non-blank; the party size is at least 1 and within
    /// capacity; the interval lies inside the day's operating hours; the
    /// interval does not collide with any reservation still occupying its
    /// slot. Nothing is persisted unless every check passes.
    ///
    /// The overlap check races against concurrent creations for the same
    /// amenity and date; the repository's `insert_reservation` contract
    /// closes that window and a lost race surfaces as the same
    /// slot-unavailable precondition failure.
    pub async fn create_reservation(&self, input: NewReservation) -> Result<AmenityReservation> {
        let amenity = self.require_amenity(input.amenity_id).await?;

        if !amenity.is_bookable() {
            return Err(EngineError::Precondition(format!(
                "{} is not currently accepting reservations",
                amenity.name
            )));
        }
        if !is_valid_time_range(input.start_time, input.end_time) {
            return Err(EngineError::Validation(format!(
                "End time {} must be after start time {}",
                input.end_time, input.start_time
            )));
        }
        if input.guest_name.trim().is_empty() {
            return Err(EngineError::Validation(
                "Guest name must not be blank".to_string(),
            ));
        }
        if input.party_size == 0 {
            return Err(EngineError::Validation(
                "Party size must be at least 1".to_string(),
            ));
        }
        if let Some(capacity) = amenity.capacity {
            if input.party_size > capacity {
                return Err(EngineError::Validation(
                    "Party size exceeds amenity capacity".to_string(),
                ));
            }
        }

        let schedules = self.repository.schedule_for(amenity.id).await?;
        let day = input.date.weekday();
        match effective_hours(&amenity, &schedules, day) {
            None => {
                return Err(EngineError::Precondition(format!(
                    "{} is closed on {}",
                    amenity.name, day
                )));
            }
            Some((opening, closing)) => {
                if input.start_time < opening || input.end_time > closing {
                    return Err(EngineError::Precondition(format!(
                        "Requested time falls outside operating hours {}-{}",
                        opening, closing
                    )));
                }
            }
        }

        let existing = self
            .repository
            .reservations_for(amenity.id, input.date)
            .await?;
        if has_conflict(input.start_time, input.end_time, &existing) {
            warn!(
                amenity_id = %amenity.id,
                date = %input.date,
                start = %input.start_time,
                end = %input.end_time,
                "booking rejected: slot conflict"
            );
            return Err(EngineError::Precondition(
                "Requested time slot conflicts with an existing reservation".to_string(),
            ));
        }

        let reservation = AmenityReservation {
            id: Uuid::new_v4(),
            amenity_id: amenity.id,
            guest_id: input.guest_id,
            guest_name: input.guest_name,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            party_size: input.party_size,
            status: ReservationStatus::Pending,
            notes: input.notes,
            created_at: self.clock.now(),
        };
        let stored = self.repository.insert_reservation(reservation).await?;
        info!(
            reservation_id = %stored.id,
            amenity_id = %stored.amenity_id,
            date = %stored.date,
            start = %stored.start_time,
            end = %stored.end_time,
            "reservation created"
        );
        Ok(stored)
    }

    /// `pending` → `confirmed`.
    pub async fn confirm_reservation(&self, id: Uuid) -> Result<AmenityReservation> {
        self.transition(
            id,
            ReservationStatus::Confirmed,
            "Can only confirm pending reservations",
        )
        .await
    }

    /// `pending`/`confirmed` → `cancelled`. Cancellation is a status change;
    /// the reservation row is never removed.
    pub async fn cancel_reservation(&self, id: Uuid) -> Result<AmenityReservation> {
        self.transition(
            id,
            ReservationStatus::Cancelled,
            "Can only cancel pending or confirmed reservations",
        )
        .await
    }

    /// `confirmed` → `completed`.
    pub async fn complete_reservation(&self, id: Uuid) -> Result<AmenityReservation> {
        self.transition(
            id,
            ReservationStatus::Completed,
            "Can only complete confirmed reservations",
        )
        .await
    }

    /// `confirmed` → `no_show`.
    pub async fn mark_no_show(&self, id: Uuid) -> Result<AmenityReservation> {
        self.transition(
            id,
            ReservationStatus::NoShow,
            "Can only mark confirmed reservations as no-show",
        )
        .await
    }

    async fn transition(
        &self,
        id: Uuid,
        to: ReservationStatus,
        rule: &str,
    ) -> Result<AmenityReservation> {
        let current = self.require_reservation(id).await?;
        if !current.status.can_transition_to(to) {
            warn!(
                reservation_id = %id,
                from = ?current.status,
                to = ?to,
                "illegal status transition rejected"
            );
            return Err(EngineError::Precondition(rule.to_string()));
        }
        let updated = self.repository.update_reservation_status(id, to).await?;
        info!(reservation_id = %id, from = ?current.status, to = ?to, "reservation status updated");
        Ok(updated)
    }

    /// Would `[start, end)` fit on `date` without colliding with a
    /// reservation that still occupies its slot?
    pub async fn check_availability(
        &self,
        amenity_id: Uuid,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<bool> {
        let amenity = self.require_amenity(amenity_id).await?;
        if !is_valid_time_range(start, end) {
            return Err(EngineError::Validation(format!(
                "End time {} must be after start time {}",
                end, start
            )));
        }
        let existing = self.repository.reservations_for(amenity.id, date).await?;
        let free = !has_conflict(start, end, &existing);
        debug!(amenity_id = %amenity.id, %date, %start, %end, free, "availability checked");
        Ok(free)
    }

    /// The free intervals left on `date` within the amenity's default
    /// operating window.
    pub async fn available_slots(&self, amenity_id: Uuid, date: NaiveDate) -> Result<Vec<Slot>> {
        let amenity = self.require_amenity(amenity_id).await?;
        let existing = self.repository.reservations_for(amenity.id, date).await?;
        Ok(free_slots(
            amenity.opening_time,
            amenity.closing_time,
            &existing,
        ))
    }

    /// Is the amenity open at `at` on weekday `day`, honoring overrides?
    pub async fn is_open_at(&self, amenity_id: Uuid, day: Weekday, at: TimeOfDay) -> Result<bool> {
        let amenity = self.require_amenity(amenity_id).await?;
        let schedules = self.repository.schedule_for(amenity.id).await?;
        Ok(is_open_at(&amenity, &schedules, day, at))
    }

    /// Is the amenity open at this instant, per the injected clock?
    /// The clock's timezone (UTC for [`SystemClock`]) defines "now"; local
    /// resort time is the caller's concern.
    pub async fn is_open_now(&self, amenity_id: Uuid) -> Result<bool> {
        let now = self.clock.now();
        let at = TimeOfDay::from_minutes((now.hour() * 60 + now.minute()) as u16);
        self.is_open_at(amenity_id, now.weekday(), at).await
    }

    /// Replace the amenity's full override set.
    ///
    /// Each open entry must have its opening strictly before its closing, and
    /// no weekday may appear twice. The repository performs the swap
    /// atomically from the caller's perspective.
    pub async fn replace_schedule(
        &self,
        amenity_id: Uuid,
        entries: Vec<AmenitySchedule>,
    ) -> Result<Vec<AmenitySchedule>> {
        let amenity = self.require_amenity(amenity_id).await?;

        let mut seen: Vec<Weekday> = Vec::with_capacity(entries.len());
        for entry in &entries {
            if entry.amenity_id != amenity.id {
                return Err(EngineError::Validation(
                    "Schedule entry references a different amenity".to_string(),
                ));
            }
            if !entry.is_closed && !is_valid_time_range(entry.opening_time, entry.closing_time) {
                return Err(EngineError::Validation(format!(
                    "Schedule for {} must open before it closes",
                    entry.day_of_week
                )));
            }
            if seen.contains(&entry.day_of_week) {
                return Err(EngineError::Validation(format!(
                    "Duplicate schedule entry for {}",
                    entry.day_of_week
                )));
            }
            seen.push(entry.day_of_week);
        }

        let stored = self.repository.replace_schedule(amenity.id, entries).await?;
        info!(amenity_id = %amenity.id, entries = stored.len(), "schedule replaced");
        Ok(stored)
    }

    /// The charge for holding the amenity over `[start, end)`.
    pub async fn quote_cost(
        &self,
        amenity_id: Uuid,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<f64> {
        let amenity = self.require_amenity(amenity_id).await?;
        if !is_valid_time_range(start, end) {
            return Err(EngineError::Validation(format!(
                "End time {} must be after start time {}",
                end, start
            )));
        }
        Ok(reservation_cost(&amenity, duration_minutes(start, end)))
    }
}
