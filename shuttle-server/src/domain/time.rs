//! Departure time handling.
//!
//! Timetables list departures as "HH:MM" strings with no date attached.
//! A departure belongs to whichever day the route is consulted for.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A shuttle departure time of day.
///
/// # Examples
///
/// ```
/// use shuttle_server::domain::DepartureTime;
///
/// let time = DepartureTime::parse_hhmm("07:30").unwrap();
/// assert_eq!(time.to_string(), "07:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Create a departure time from a chrono time, dropping seconds.
    pub fn new(time: NaiveTime) -> Self {
        Self(time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time))
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::DepartureTime;
    ///
    /// assert!(DepartureTime::parse_hhmm("00:00").is_ok());
    /// assert!(DepartureTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(DepartureTime::parse_hhmm("7:30").is_err());
    /// assert!(DepartureTime::parse_hhmm("0730").is_err());
    /// assert!(DepartureTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Timetable entries are always zero padded: exactly "HH:MM"
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        // Check colon position
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        // Parse hours
        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        // Parse minutes
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// True if this departure leaves strictly after `moment` on the same day.
    pub fn is_after(&self, moment: NaiveTime) -> bool {
        self.0 > moment
    }

    /// How long after `moment` this departure leaves.
    ///
    /// Negative if the departure has already gone.
    pub fn wait_from(&self, moment: NaiveTime) -> Duration {
        self.0.signed_duration_since(moment)
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl<'de> Deserialize<'de> for DepartureTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hhmm(&raw)
            .map_err(|e| serde::de::Error::custom(format!("{e} in {raw:?}")))
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
