//! Schedule loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Reading the schedule file failed
    #[error("failed to read schedule {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is malformed or contains an invalid time
    #[error("invalid schedule: {0}")]
    Parse(#[from] serde_yaml::Error),
}
