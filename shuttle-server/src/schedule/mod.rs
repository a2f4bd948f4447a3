//! The weekly shuttle timetable.
//!
//! A [`Schedule`] is parsed once from a YAML document and never mutated
//! afterwards. Services that need to pick up edits hold it in a
//! [`ScheduleStore`], which swaps in a freshly parsed schedule as a whole.

mod error;
mod store;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::{DayClass, Direction, Route};

pub use error::ScheduleError;
pub use store::ScheduleStore;

/// Four routes covering both directions on workdays and holidays.
///
/// Missing keys in the source document produce empty routes; unknown keys
/// are ignored.
///
/// # Examples
///
/// ```
/// use shuttle_server::schedule::Schedule;
///
/// let schedule = Schedule::from_yaml(br#"
/// WorkDayRouteToOffice: ["07:30", "08:00"]
/// HolidayRouteFromOffice: ["18:00"]
/// "#).unwrap();
///
/// assert_eq!(schedule.work_day_route_to_office.len(), 2);
/// assert!(schedule.holiday_route_to_office.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Schedule {
    pub work_day_route_to_office: Route,
    pub holiday_route_to_office: Route,
    pub work_day_route_from_office: Route,
    pub holiday_route_from_office: Route,
}

impl Schedule {
    /// Parse a schedule document.
    ///
    /// Fails as a whole if the structure is wrong or any entry is not a
    /// valid "HH:MM" time.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, ScheduleError> {
        Ok(serde_yaml::from_slice(bytes)?)
    }

    /// The route for a class of day and direction.
    pub fn route(&self, day: DayClass, direction: Direction) -> &Route {
        match (day, direction) {
            (DayClass::WorkDay, Direction::ToOffice) => &self.work_day_route_to_office,
            (DayClass::Holiday, Direction::ToOffice) => &self.holiday_route_to_office,
            (DayClass::WorkDay, Direction::FromOffice) => &self.work_day_route_from_office,
            (DayClass::Holiday, Direction::FromOffice) => &self.holiday_route_from_office,
        }
    }

    /// The route running on the date of `at` in the given direction.
    pub fn find_correct_route(&self, at: NaiveDateTime, direction: Direction) -> &Route {
        self.route(DayClass::of(at.date()), direction)
    }

    /// Total number of departures across all four routes.
    pub fn departure_count(&self) -> usize {
        self.work_day_route_to_office.len()
            + self.holiday_route_to_office.len()
            + self.work_day_route_from_office.len()
            + self.holiday_route_from_office.len()
    }
}
