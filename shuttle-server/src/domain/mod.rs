//! Domain types for the shuttle advisor.
//!
//! These types represent validated timetable data. All of them enforce
//! their invariants at construction time, so code receiving them can
//! trust their validity.

mod day;
mod route;
mod time;

pub use day::{DayClass, Direction};
pub use route::Route;
pub use time::{DepartureTime, TimeError};
