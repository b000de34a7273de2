//! Injectable time source.
//!
//! Business logic never reads the wall clock directly; the service takes a
//! [`Clock`] so "open right now" checks and creation timestamps are
//! deterministic under test.

use chrono::{DateTime, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
