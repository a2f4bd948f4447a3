//! Day classes and travel directions.

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Which timetable variant runs on a given date.
///
/// Only weekends count as holidays; public holidays are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayClass {
    /// Monday to Friday.
    WorkDay,
    /// Saturday and Sunday.
    Holiday,
}

impl DayClass {
    /// Classify a calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use shuttle_server::domain::DayClass;
    /// use chrono::NaiveDate;
    ///
    /// let friday = NaiveDate::from_ymd_opt(2016, 8, 12).unwrap();
    /// assert_eq!(DayClass::of(friday), DayClass::WorkDay);
    ///
    /// let sunday = NaiveDate::from_ymd_opt(2016, 8, 14).unwrap();
    /// assert_eq!(DayClass::of(sunday), DayClass::Holiday);
    /// ```
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayClass::Holiday,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                DayClass::WorkDay
            }
        }
    }
}

/// Direction of travel relative to the office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the metro station to the office.
    ToOffice,
    /// From the office back to the metro station.
    FromOffice,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToOffice => f.write_str("to-office"),
            Direction::FromOffice => f.write_str("from-office"),
        }
    }
}
