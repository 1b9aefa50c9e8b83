//! An immutable interval of time.
//!
//! A [`Timespan`] is an inclusive range `[start, end]` with the invariant
//! `start <= end`. The fields are private so the invariant holds for the
//! lifetime of every value; construction goes through [`Timespan::new`],
//! which rejects reversed bounds.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// An inclusive interval of time with `start <= end`.
///
/// A timespan of zero width (`start == end`) is valid and represents a
/// single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Timespan {
    /// Creates a timespan covering `[start, end]`.
    ///
    /// # Parameters
    ///
    /// - `start`: Beginning of the interval (inclusive)
    /// - `end`: End of the interval (inclusive)
    ///
    /// # Returns
    ///
    /// - `Ok(Timespan)`: The interval, when `start <= end`
    /// - `Err`: When `start` is after `end`
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if start > end {
            return Err(format!(
                "Timespan start {} must not be after end {}",
                start, end
            )
            .into());
        }
        Ok(Timespan { start, end })
    }

    /// The beginning of the interval (inclusive).
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The end of the interval (inclusive).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `instant` lies within the interval, endpoints included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}...{}]", self.start, self.end)
    }
}
