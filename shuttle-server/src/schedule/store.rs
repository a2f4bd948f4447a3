//! Shared, reloadable schedule.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::Schedule;
use super::error::ScheduleError;

/// Thread-safe handle to the current schedule.
///
/// Readers take an `Arc<Schedule>` snapshot and keep using it for the
/// whole query, so a concurrent reload never exposes a half-built
/// schedule.
#[derive(Clone)]
pub struct ScheduleStore {
    inner: Arc<RwLock<Arc<Schedule>>>,
    path: Option<PathBuf>,
}

impl ScheduleStore {
    /// Create a store by reading and parsing the schedule file.
    ///
    /// This will fail if the file is missing or malformed.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, ScheduleError> {
        let path = path.into();
        let schedule = read_schedule(&path).await?;
        info!(
            path = %path.display(),
            departures = schedule.departure_count(),
            "loaded schedule"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(schedule))),
            path: Some(path),
        })
    }

    /// Create a store around an in-memory schedule.
    ///
    /// Such a store has no backing file, so [`reload`](Self::reload) keeps
    /// the schedule unchanged.
    pub fn from_schedule(schedule: Schedule) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(schedule))),
            path: None,
        }
    }

    /// Snapshot of the current schedule.
    pub async fn current(&self) -> Arc<Schedule> {
        let guard = self.inner.read().await;
        Arc::clone(&*guard)
    }

    /// The file this store reloads from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Re-read the schedule file.
    ///
    /// On success, replaces the current schedule and returns its number of
    /// departures. On failure, the existing schedule is preserved and the
    /// error is returned.
    pub async fn reload(&self) -> Result<usize, ScheduleError> {
        let Some(path) = &self.path else {
            return Ok(self.current().await.departure_count());
        };

        let schedule = read_schedule(path).await?;
        let count = schedule.departure_count();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(schedule);

        Ok(count)
    }
}

async fn read_schedule(path: &Path) -> Result<Schedule, ScheduleError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Schedule::from_yaml(&bytes)
}
