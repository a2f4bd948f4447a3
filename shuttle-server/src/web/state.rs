//! Application state for the web layer.

use std::sync::Arc;

use crate::advisor::AdvisorConfig;
use crate::schedule::ScheduleStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Current shuttle schedule
    pub schedule: ScheduleStore,

    /// Recommendation tuning
    pub config: Arc<AdvisorConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedule: ScheduleStore, config: AdvisorConfig) -> Self {
        Self {
            schedule,
            config: Arc::new(config),
        }
    }
}
