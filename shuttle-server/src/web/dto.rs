//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::advisor::Recommendation;

/// Query for a trip recommendation.
#[derive(Debug, Default, Deserialize)]
pub struct TripQuery {
    /// Local moment in `YYYY-MM-DDTHH:MM` format (defaults to now)
    pub at: Option<String>,
}

/// A trip recommendation.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    /// Outcome category: two_trips, last_trip, taxi or sleep
    pub outcome: &'static str,

    /// Reply text
    pub text: String,
}

/// The full timetable for one direction.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub workday: String,
    pub holiday: String,
}

/// Result of a schedule reload.
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Departures in the newly loaded schedule
    pub departures: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<Recommendation> for TripResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            outcome: recommendation.outcome(),
            text: recommendation.to_string(),
        }
    }
}

impl From<[String; 2]> for ScheduleResponse {
    fn from([workday, holiday]: [String; 2]) -> Self {
        Self { workday, holiday }
    }
}
