use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Environment variable pointing at an explicit config file.
pub(super) const CONFIG_PATH_ENV: &str = "NURSERY_MONITOR_CONFIG";

/// Environment variable overriding the device base URL.
pub(super) const DEVICE_URL_ENV: &str = "NURSERY_DEVICE_URL";

/// Get the path to the config.json file
/// Honours NURSERY_MONITOR_CONFIG, otherwise looks in the current directory
pub(super) fn get_config_path() -> PathBuf {
    if let Ok(custom) = env::var(CONFIG_PATH_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            debug!(path = %trimmed, "Using config path from environment");
            return PathBuf::from(trimmed);
        }
    }

    PathBuf::from("config.json")
}

/// Base URL override from the environment, if set and not blank.
pub(super) fn device_url_override() -> Option<String> {
    env::var(DEVICE_URL_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
