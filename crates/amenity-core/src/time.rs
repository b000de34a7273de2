//! Minute-of-day time arithmetic.
//!
//! Operating hours and reservation boundaries are wall-clock times within a
//! single calendar day, carried as `"HH:MM"` strings at the edges and as a
//! [`TimeOfDay`] in every computation. `to_minutes` is the canonical
//! comparable representation every other module works in.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::{Result, TimeError};

/// A wall-clock time within one day, with minute precision.
///
/// Ordered by minute of day. `24:00` is representable as the exclusive
/// end-of-day sentinel (a closing time), but `24:01` and beyond are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
}

impl TimeOfDay {
    /// Midnight, the inclusive start of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hours: 0,
        minutes: 0,
    };

    /// `24:00`, the exclusive end of the day.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        hours: 24,
        minutes: 0,
    };

    /// Construct a time of day, rejecting out-of-range components.
    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        if hours > 24 || minutes > 59 || (hours == 24 && minutes != 0) {
            return Err(TimeError::OutOfRange { hours, minutes });
        }
        Ok(TimeOfDay { hours, minutes })
    }

    /// Rebuild a time from a minute-of-day count (inverse of [`to_minutes`]).
    ///
    /// Values past `24:00` saturate to the end-of-day sentinel; sweep cursors
    /// never legitimately exceed it.
    ///
    /// [`to_minutes`]: TimeOfDay::to_minutes
    pub fn from_minutes(minutes: u16) -> Self {
        if minutes >= 24 * 60 {
            return Self::END_OF_DAY;
        }
        TimeOfDay {
            hours: (minutes / 60) as u8,
            minutes: (minutes % 60) as u8,
        }
    }

    pub fn hours(self) -> u8 {
        self.hours
    }

    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// Minute of day: `hours * 60 + minutes`.
    pub fn to_minutes(self) -> u16 {
        self.hours as u16 * 60 + self.minutes as u16
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeError::Malformed(s.to_string()))?;
        let hours: u8 = h.parse().map_err(|_| TimeError::Malformed(s.to_string()))?;
        let minutes: u8 = m.parse().map_err(|_| TimeError::Malformed(s.to_string()))?;
        TimeOfDay::new(hours, minutes)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A reservation interval is valid when it ends strictly after it starts.
/// Zero-length ranges are invalid.
pub fn is_valid_time_range(start: TimeOfDay, end: TimeOfDay) -> bool {
    end.to_minutes() > start.to_minutes()
}

/// Signed length of `[start, end)` in minutes.
///
/// Negative when `end` precedes `start`; callers are expected to check
/// [`is_valid_time_range`] first.
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> i64 {
    end.to_minutes() as i64 - start.to_minutes() as i64
}
