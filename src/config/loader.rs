use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::types::MonitorError;

use super::{paths, Config};

impl Config {
    /// Load configuration from config.json and the environment
    /// Falls back to defaults if the file doesn't exist or can't be parsed
    pub async fn load() -> Self {
        let config_path = paths::get_config_path();
        let mut config = Self::load_from(&config_path).await;

        if let Some(url) = paths::device_url_override() {
            info!(url = %url, "Device URL overridden from environment");
            config.device_base_url = url;
        }

        info!(
            device = %config.device_base_url,
            tick_ms = config.tick_period_ms,
            refresh_ms = config.refresh_interval_ms,
            "Loaded configuration"
        );
        config
    }

    /// Load configuration from an explicit path, falling back to defaults
    pub async fn load_from(path: &Path) -> Self {
        match Self::try_load(path).await {
            Ok(config) => config,
            Err(err) => {
                warn!(error = ?err, "Failed to load config.json, using defaults");
                Self::default()
            }
        }
    }

    async fn try_load(path: &Path) -> Result<Self, MonitorError> {
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .await
            .map_err(|err| MonitorError::Config(format!("Failed to read config file: {err}")))?;

        serde_json::from_str(&contents)
            .map_err(|err| MonitorError::Config(format!("Failed to parse config.json: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).await;
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn invalid_json_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let config = Config::load_from(file.path()).await;
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn reads_values_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"device_base_url": "http://10.0.0.7", "tick_period_ms": 500}}"#
        )
        .unwrap();
        let config = Config::load_from(file.path()).await;
        assert_eq!(config.device_base_url, "http://10.0.0.7");
        assert_eq!(config.tick_period_ms, 500);
        assert_eq!(config.refresh_interval_ms, 5000);
    }
}
