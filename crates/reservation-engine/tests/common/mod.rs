//! Shared test support: an in-memory repository, a fixed clock and fixture
//! builders.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use amenity_core::model::{
    Amenity, AmenityCategory, AmenityReservation, AmenitySchedule, AmenityStatus,
    ReservationStatus,
};
use amenity_core::time::TimeOfDay;
use reservation_engine::{AmenityRepository, Clock, NewReservation, RepositoryError};

pub fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A spa open 08:00-18:00, capacity 8, 45.00/hour.
pub fn spa() -> Amenity {
    Amenity {
        id: Uuid::new_v4(),
        name: "Cedar Spa".to_string(),
        category: AmenityCategory::Spa,
        location: "Garden level".to_string(),
        capacity: Some(8),
        opening_time: t("08:00"),
        closing_time: t("18:00"),
        requires_reservation: true,
        price_per_hour: Some(45.0),
        is_complimentary: false,
        status: AmenityStatus::Available,
        is_active: true,
        rules: None,
        images: vec![],
    }
}

/// A 10:00-12:00 booking request for two on Tuesday 2026-07-14.
pub fn booking(amenity_id: Uuid) -> NewReservation {
    NewReservation {
        amenity_id,
        guest_id: Uuid::new_v4(),
        guest_name: "Avery Johnson".to_string(),
        date: date("2026-07-14"),
        start_time: t("10:00"),
        end_time: t("12:00"),
        party_size: 2,
        notes: None,
    }
}

/// A stored reservation in the given status on Tuesday 2026-07-14.
pub fn stored_reservation(
    amenity_id: Uuid,
    start: &str,
    end: &str,
    status: ReservationStatus,
) -> AmenityReservation {
    AmenityReservation {
        id: Uuid::new_v4(),
        amenity_id,
        guest_id: Uuid::new_v4(),
        guest_name: "Avery Johnson".to_string(),
        date: date("2026-07-14"),
        start_time: t(start),
        end_time: t(end),
        party_size: 2,
        status,
        notes: None,
        created_at: Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap(),
    }
}

#[derive(Default)]
struct State {
    amenities: HashMap<Uuid, Amenity>,
    schedules: HashMap<Uuid, Vec<AmenitySchedule>>,
    reservations: HashMap<Uuid, AmenityReservation>,
}

/// In-memory repository. A whole-state mutex stands in for the per
/// `(amenity, date)` serialization a real backend provides, which also
/// satisfies the `insert_reservation` contract trivially. Failure toggles
/// simulate a broken backend and a lost creation race.
#[derive(Default)]
pub struct InMemoryRepository {
    state: Mutex<State>,
    pub fail_storage: AtomicBool,
    pub next_insert_loses_race: AtomicBool,
}

impl InMemoryRepository {
    pub fn with_amenity(amenity: Amenity) -> Self {
        let repo = Self::default();
        repo.state
            .lock()
            .unwrap()
            .amenities
            .insert(amenity.id, amenity);
        repo
    }

    pub fn add_reservation(&self, reservation: AmenityReservation) {
        self.state
            .lock()
            .unwrap()
            .reservations
            .insert(reservation.id, reservation);
    }

    pub fn add_schedule(&self, entry: AmenitySchedule) {
        self.state
            .lock()
            .unwrap()
            .schedules
            .entry(entry.amenity_id)
            .or_default()
            .push(entry);
    }

    pub fn reservation_count(&self) -> usize {
        self.state.lock().unwrap().reservations.len()
    }

    fn check_storage(&self) -> Result<(), RepositoryError> {
        if self.fail_storage.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend(anyhow::anyhow!(
                "connection refused"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl AmenityRepository for InMemoryRepository {
    async fn amenity_by_id(&self, id: Uuid) -> Result<Option<Amenity>, RepositoryError> {
        self.check_storage()?;
        Ok(self.state.lock().unwrap().amenities.get(&id).cloned())
    }

    async fn schedule_for(&self, amenity_id: Uuid) -> Result<Vec<AmenitySchedule>, RepositoryError> {
        self.check_storage()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .schedules
            .get(&amenity_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_schedule(
        &self,
        amenity_id: Uuid,
        entries: Vec<AmenitySchedule>,
    ) -> Result<Vec<AmenitySchedule>, RepositoryError> {
        self.check_storage()?;
        self.state
            .lock()
            .unwrap()
            .schedules
            .insert(amenity_id, entries.clone());
        Ok(entries)
    }

    async fn reservations_for(
        &self,
        amenity_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AmenityReservation>, RepositoryError> {
        self.check_storage()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .reservations
            .values()
            .filter(|r| r.amenity_id == amenity_id && r.date == date)
            .cloned()
            .collect())
    }

    async fn reservation_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<AmenityReservation>, RepositoryError> {
        self.check_storage()?;
        Ok(self.state.lock().unwrap().reservations.get(&id).cloned())
    }

    async fn insert_reservation(
        &self,
        reservation: AmenityReservation,
    ) -> Result<AmenityReservation, RepositoryError> {
        self.check_storage()?;
        if self.next_insert_loses_race.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::SlotTaken);
        }
        self.state
            .lock()
            .unwrap()
            .reservations
            .insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<AmenityReservation, RepositoryError> {
        self.check_storage()?;
        let mut state = self.state.lock().unwrap();
        let reservation = state
            .reservations
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::Backend(anyhow::anyhow!("row vanished: {id}")))?;
        reservation.status = status;
        Ok(reservation.clone())
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        // Tuesday 2026-07-14, 10:30 UTC.
        FixedClock(Utc.with_ymd_and_hms(2026, 7, 14, 10, 30, 0).unwrap())
    }
}
