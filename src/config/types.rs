use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Period of the timer that drives the refresh scheduler.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Minimum spacing between two status polls.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(5000);

const DEFAULT_DEVICE_BASE_URL: &str = "http://nursery-devel.local/";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;

/// Configuration for the nursery monitor client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_device_base_url")]
    pub device_base_url: String,

    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,

    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_base_url: default_device_base_url(),
            tick_period_ms: default_tick_period_ms(),
            refresh_interval_ms: default_refresh_interval_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Tick period as a duration, never zero.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(1))
    }

    /// Refresh interval as a duration, never zero.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn default_device_base_url() -> String {
    DEFAULT_DEVICE_BASE_URL.to_string()
}

fn default_tick_period_ms() -> u64 {
    DEFAULT_TICK_PERIOD.as_millis() as u64
}

fn default_refresh_interval_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL.as_millis() as u64
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}
