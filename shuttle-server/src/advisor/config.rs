//! Advisor configuration.

use chrono::Duration;

/// Longest horizon that still means "the next few hours": a whole day.
pub const MAX_HORIZON_MINS: i64 = 24 * 60;

/// Tuning for trip recommendations.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// How far ahead the nearest departure may be and still be
    /// recommended (minutes). Anything later counts as "not in the next
    /// few hours".
    pub horizon_mins: i64,

    /// Maximum number of morning departures listed when suggesting to
    /// go to the office tomorrow.
    pub morning_trips: usize,
}

impl AdvisorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(horizon_mins: i64, morning_trips: usize) -> Self {
        Self {
            horizon_mins,
            morning_trips,
        }
    }

    /// Returns the horizon as a Duration, clamped to `0..=MAX_HORIZON_MINS`.
    pub fn horizon(&self) -> Duration {
        Duration::minutes(self.horizon_mins.clamp(0, MAX_HORIZON_MINS))
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            horizon_mins: 180, // 3 hours
            morning_trips: 3,
        }
    }
}
