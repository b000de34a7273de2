//! The storage collaborator consumed by the reservation service.
//!
//! The transport behind this trait — SQL, an in-memory map, a remote service —
//! is irrelevant to the engine; implementations only have to honor the
//! contracts documented per method.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use amenity_core::model::{Amenity, AmenityReservation, AmenitySchedule, ReservationStatus};

use crate::error::RepositoryError;

type Result<T> = std::result::Result<T, RepositoryError>;

/// Storage operations for amenities, schedules and reservations.
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn amenity_by_id(&self, id: Uuid) -> Result<Option<Amenity>>;

    /// All schedule overrides for one amenity (at most one per weekday).
    async fn schedule_for(&self, amenity_id: Uuid) -> Result<Vec<AmenitySchedule>>;

    /// Atomically replace the full override set for one amenity and return
    /// the stored entries.
    async fn replace_schedule(
        &self,
        amenity_id: Uuid,
        entries: Vec<AmenitySchedule>,
    ) -> Result<Vec<AmenitySchedule>>;

    /// Every reservation for one amenity on one date, regardless of status.
    async fn reservations_for(
        &self,
        amenity_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AmenityReservation>>;

    async fn reservation_by_id(&self, id: Uuid) -> Result<Option<AmenityReservation>>;

    /// Persist a new reservation.
    ///
    /// Contract: the overlap check the service runs before calling this is a
    /// read followed by a write, and a concurrent request for the same
    /// amenity and date can interleave between the two. Implementations must
    /// close that window themselves — either by running read-check-insert in
    /// a transaction serialized per `(amenity_id, date)`, or by enforcing a
    /// storage-level exclusion constraint — and report a lost race as
    /// [`RepositoryError::SlotTaken`].
    async fn insert_reservation(
        &self,
        reservation: AmenityReservation,
    ) -> Result<AmenityReservation>;

    /// Update the status of an existing reservation and return the stored row.
    async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<AmenityReservation>;
}

/// Shared handles delegate to the inner repository, so a service and its
/// caller can hold the same storage.
#[async_trait]
impl<T: AmenityRepository + ?Sized> AmenityRepository for Arc<T> {
    async fn amenity_by_id(&self, id: Uuid) -> Result<Option<Amenity>> {
        (**self).amenity_by_id(id).await
    }

    async fn schedule_for(&self, amenity_id: Uuid) -> Result<Vec<AmenitySchedule>> {
        (**self).schedule_for(amenity_id).await
    }

    async fn replace_schedule(
        &self,
        amenity_id: Uuid,
        entries: Vec<AmenitySchedule>,
    ) -> Result<Vec<AmenitySchedule>> {
        (**self).replace_schedule(amenity_id, entries).await
    }

    async fn reservations_for(
        &self,
        amenity_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<AmenityReservation>> {
        (**self).reservations_for(amenity_id, date).await
    }

    async fn reservation_by_id(&self, id: Uuid) -> Result<Option<AmenityReservation>> {
        (**self).reservation_by_id(id).await
    }

    async fn insert_reservation(
        &self,
        reservation: AmenityReservation,
    ) -> Result<AmenityReservation> {
        (**self).insert_reservation(reservation).await
    }

    async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<AmenityReservation> {
        (**self).update_reservation_status(id, status).await
    }
}
