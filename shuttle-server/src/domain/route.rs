//! Ordered departure lists.

use chrono::NaiveTime;
use serde::Deserialize;
use std::fmt;

use super::DepartureTime;

/// Departures for one direction on one class of day.
///
/// Entries keep the order they were configured in, which is expected to
/// be chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<DepartureTime>);

impl Route {
    pub fn new(departures: Vec<DepartureTime>) -> Self {
        Self(departures)
    }

    /// All departures in configured order.
    pub fn departures(&self) -> &[DepartureTime] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Departures leaving strictly after `moment`, in configured order.
    pub fn departures_after(&self, moment: NaiveTime) -> impl Iterator<Item = DepartureTime> + '_ {
        self.0.iter().copied().filter(move |d| d.is_after(moment))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for departure in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{departure}")?;
            first = false;
        }
        Ok(())
    }
}
