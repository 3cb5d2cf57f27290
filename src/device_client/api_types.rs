use serde::Deserialize;

use super::helpers::{null_as_default, scalar_text};

/// One decoded `/status` response. Replaced wholesale by the next poll.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default, deserialize_with = "scalar_text")]
    pub time: String,
    /// 0 means the light is off.
    #[serde(default, deserialize_with = "null_as_default")]
    pub brightness: i64,
    #[serde(default, deserialize_with = "scalar_text")]
    pub last_light_time: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub door_status: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub last_door_time: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub last_motion_time: String,
    /// Degrees Fahrenheit.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub server_uptime: String,
    #[serde(default)]
    pub waking_up: Option<bool>,
    /// LED ring timeout, e.g. "42 seconds remaining" or "inactive".
    #[serde(default, deserialize_with = "scalar_text")]
    pub timeout: String,
}

impl StatusSnapshot {
    pub fn light_on(&self) -> bool {
        self.brightness != 0
    }
}
