//! # reservation-engine
//!
//! Orchestration layer over [`amenity_core`]: the reservation lifecycle state
//! machine, creation preconditions, availability queries and schedule
//! replacement, all running against an injected repository collaborator.
//!
//! The engine itself performs no I/O — it is async purely because the
//! repository (fetch amenity, fetch reservations, persist) is. Every business
//! rule is checked synchronously and fails on the first violation.
//!
//! ## Modules
//!
//! - [`service`] — [`ReservationService`], the entry point for all operations
//! - [`repository`] — the storage collaborator trait and its error contract
//! - [`clock`] — injectable time source
//! - [`error`] — the error taxonomy callers match on

pub mod clock;
pub mod error;
pub mod repository;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use error::{EngineError, RepositoryError};
pub use repository::AmenityRepository;
pub use service::{NewReservation, ReservationService};
