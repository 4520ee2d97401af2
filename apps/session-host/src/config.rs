//! Host configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use plume_core::config::TICK_INTERVAL;

/// Session host configuration.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Directory the JSON document store writes to.
    pub data_dir: PathBuf,
    /// Period of the publish ticker.
    pub tick_interval: Duration,
    /// Whether the ticker runs at all.
    pub ticker_enabled: bool,
}

impl HostConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("PLUME_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            tick_interval: env::var("TICK_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(TICK_INTERVAL),
            ticker_enabled: env::var("TICKER_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
