//! Trip recommendations.
//!
//! Given the schedule and the current moment, the advisor picks which
//! route applies today, finds the nearest departures and renders the
//! reply text: two upcoming trips, the last trip of the day, or a
//! fallback (take a taxi home, or sleep and go to work in the morning).

mod config;
mod recommend;
pub mod texts;

#[cfg(test)]
mod advisor_tests;

pub use config::{AdvisorConfig, MAX_HORIZON_MINS};
pub use recommend::{Advisor, Recommendation};
