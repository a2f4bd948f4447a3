//! Trip selection.

use chrono::NaiveDateTime;
use std::fmt;
use tracing::debug;

use crate::domain::{DayClass, DepartureTime, Direction};
use crate::schedule::Schedule;

use super::config::AdvisorConfig;
use super::texts;

/// What the advisor suggests for a given moment and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// The nearest departure and the one after it.
    TwoTrips {
        direction: Direction,
        first: DepartureTime,
        second: DepartureTime,
    },
    /// The nearest departure is the last one today.
    LastTrip {
        direction: Direction,
        only: DepartureTime,
    },
    /// Nothing leaves the office soon; take a taxi.
    Taxi,
    /// Nothing goes to the office soon; these are the first trips of the
    /// morning.
    Sleep { morning: Vec<DepartureTime> },
}

impl Recommendation {
    /// Short machine-readable name of the outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            Recommendation::TwoTrips { .. } => "two_trips",
            Recommendation::LastTrip { .. } => "last_trip",
            Recommendation::Taxi => "taxi",
            Recommendation::Sleep { .. } => "sleep",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::TwoTrips {
                direction,
                first,
                second,
            } => texts::two_trips(*direction, *first, *second),
            Recommendation::LastTrip { direction, only } => texts::last_trip(*direction, *only),
            Recommendation::Taxi => texts::taxi(),
            Recommendation::Sleep { morning } => texts::sleep(morning),
        };
        f.write_str(&text)
    }
}

/// Answers "when is the next shuttle?" against a fixed schedule.
///
/// All methods are pure: the same schedule, config and moment always give
/// the same answer.
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'a> {
    schedule: &'a Schedule,
    config: &'a AdvisorConfig,
}

impl<'a> Advisor<'a> {
    pub fn new(schedule: &'a Schedule, config: &'a AdvisorConfig) -> Self {
        Self { schedule, config }
    }

    /// Pick the recommendation for leaving at `at` in `direction`.
    ///
    /// Only departures later the same day are considered, and the nearest
    /// one must fall within the configured horizon.
    pub fn recommend(&self, at: NaiveDateTime, direction: Direction) -> Recommendation {
        let route = self.schedule.find_correct_route(at, direction);
        let moment = at.time();
        let mut upcoming = route.departures_after(moment);

        let nearest = upcoming
            .next()
            .filter(|d| d.wait_from(moment) <= self.config.horizon());

        let recommendation = match (nearest, upcoming.next()) {
            (Some(first), Some(second)) => Recommendation::TwoTrips {
                direction,
                first,
                second,
            },
            (Some(only), None) => Recommendation::LastTrip { direction, only },
            (None, _) => match direction {
                Direction::FromOffice => Recommendation::Taxi,
                Direction::ToOffice => Recommendation::Sleep {
                    morning: self.morning_trips(at),
                },
            },
        };

        debug!(%at, %direction, outcome = recommendation.outcome(), "selected trip");
        recommendation
    }

    /// First trips to the office worth sleeping until.
    ///
    /// Today's remaining departures if there are any, otherwise the start
    /// of tomorrow's route.
    fn morning_trips(&self, at: NaiveDateTime) -> Vec<DepartureTime> {
        let limit = self.config.morning_trips;
        let today: Vec<_> = self
            .schedule
            .find_correct_route(at, Direction::ToOffice)
            .departures_after(at.time())
            .take(limit)
            .collect();
        if !today.is_empty() {
            return today;
        }

        let Some(tomorrow) = at.date().succ_opt() else {
            return Vec::new();
        };
        self.schedule
            .route(DayClass::of(tomorrow), Direction::ToOffice)
            .departures()
            .iter()
            .copied()
            .take(limit)
            .collect()
    }

    pub fn best_trip_to_office_text(&self, at: NaiveDateTime) -> String {
        self.recommend(at, Direction::ToOffice).to_string()
    }

    pub fn best_trip_from_office_text(&self, at: NaiveDateTime) -> String {
        self.recommend(at, Direction::FromOffice).to_string()
    }

    /// Whole timetable for a direction: `[workdays, holidays]`.
    pub fn full_schedule_texts(&self, direction: Direction) -> [String; 2] {
        [DayClass::WorkDay, DayClass::Holiday]
            .map(|day| texts::full_schedule(direction, day, self.schedule.route(day, direction)))
    }

    pub fn full_to_office_texts(&self) -> [String; 2] {
        self.full_schedule_texts(Direction::ToOffice)
    }

    pub fn full_from_office_texts(&self) -> [String; 2] {
        self.full_schedule_texts(Direction::FromOffice)
    }
}
