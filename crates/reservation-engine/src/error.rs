//! Error taxonomy for reservation operations.
//!
//! Four kinds, deliberately distinguishable by callers:
//!
//! - not-found — an id failed to resolve; never retried
//! - validation — the request payload alone is malformed or out of policy;
//!   detected before any mutation
//! - precondition — the payload is fine but the current stored state forbids
//!   the operation (wrong status, conflicting slot, amenity unavailable)
//! - repository — the storage collaborator failed; opaque, always propagated

use thiserror::Error;
use uuid::Uuid;

/// Failure of the storage collaborator.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The storage layer's exclusion constraint rejected an insert because a
    /// concurrent booking claimed the slot first. The service translates this
    /// into [`EngineError::Precondition`] so callers see the same error as an
    /// in-band conflict.
    #[error("slot was claimed concurrently")]
    SlotTaken,

    /// Timeout, connection loss, or any other infrastructure failure.
    #[error("storage backend failure")]
    Backend(#[from] anyhow::Error),
}

/// Error returned by every [`crate::ReservationService`] operation.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("amenity not found: {0}")]
    AmenityNotFound(Uuid),

    #[error("reservation not found: {0}")]
    ReservationNotFound(Uuid),

    /// The request payload is invalid regardless of stored state.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The request is well-formed but the current state forbids it.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Infrastructure failure from the repository collaborator.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for EngineError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // A lost race is a business outcome, not an infrastructure fault.
            RepositoryError::SlotTaken => EngineError::Precondition(
                "requested time slot is no longer available".to_string(),
            ),
            other => EngineError::Repository(other),
        }
    }
}

/// Convenience alias used throughout reservation-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
