//! Service configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::advisor::{AdvisorConfig, MAX_HORIZON_MINS};

const DEFAULT_SCHEDULE_PATH: &str = "schedule.yaml";
const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000,
);
const DEFAULT_RELOAD_SECS: u64 = 300;

/// Everything the binary needs to start serving.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Schedule YAML file
    pub schedule_path: PathBuf,

    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,

    /// How often to re-read the schedule file; `None` disables reloading
    pub reload_interval: Option<Duration>,

    pub advisor: AdvisorConfig,
}

impl ServiceConfig {
    /// Read configuration from `SHUTTLE_*` environment variables.
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AdvisorConfig::default();

        let schedule_path = lookup("SHUTTLE_SCHEDULE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEDULE_PATH));
        let listen_addr = parsed(&lookup, "SHUTTLE_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let reload_secs = parsed(&lookup, "SHUTTLE_RELOAD_SECS", DEFAULT_RELOAD_SECS);
        let horizon_mins = parsed(&lookup, "SHUTTLE_HORIZON_MINS", defaults.horizon_mins);
        let horizon_mins = if (0..=MAX_HORIZON_MINS).contains(&horizon_mins) {
            horizon_mins
        } else {
            warn!(
                key = "SHUTTLE_HORIZON_MINS",
                value = horizon_mins,
                default = defaults.horizon_mins,
                "ignoring out-of-range setting"
            );
            defaults.horizon_mins
        };

        Self {
            schedule_path,
            listen_addr,
            reload_interval: (reload_secs > 0).then(|| Duration::from_secs(reload_secs)),
            advisor: AdvisorConfig::new(horizon_mins, defaults.morning_trips),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        warn!(key, value = %raw, %default, "ignoring unparseable setting");
        default
    })
}
