use crate::device_client::StatusSnapshot;

pub const UNAVAILABLE_TEXT: &str = "N/A";
pub const PLACEHOLDER_MESSAGE: &str = "Waiting for status";

const TEMPERATURE_SUFFIX: &str = " F";
const HUMIDITY_SUFFIX: &str = " %";

/// Result of one status poll as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    Success(StatusSnapshot),
    /// Never polled, unreachable, non-200 or undecodable. Deliberately opaque.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Placeholder,
    Populated,
}

/// The ten displayed fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    LightStatus,
    LastLightTime,
    Brightness,
    DoorStatus,
    LastDoorTime,
    LastMotionTime,
    Temperature,
    Humidity,
    ServerUptime,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Time,
        Field::LightStatus,
        Field::LastLightTime,
        Field::Brightness,
        Field::DoorStatus,
        Field::LastDoorTime,
        Field::LastMotionTime,
        Field::Temperature,
        Field::Humidity,
        Field::ServerUptime,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::LightStatus => "light_status",
            Field::LastLightTime => "last_light_time",
            Field::Brightness => "brightness",
            Field::DoorStatus => "door_status",
            Field::LastDoorTime => "last_door_time",
            Field::LastMotionTime => "last_motion_time",
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
            Field::ServerUptime => "server_uptime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Time => "Time",
            Field::LightStatus => "Light",
            Field::LastLightTime => "Light changed",
            Field::Brightness => "Brightness",
            Field::DoorStatus => "Door",
            Field::LastDoorTime => "Door changed",
            Field::LastMotionTime => "Last motion",
            Field::Temperature => "Temperature",
            Field::Humidity => "Humidity",
            Field::ServerUptime => "Device uptime",
        }
    }
}

/// Presentation state produced by rendering a poll outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    mode: ViewMode,
    values: [String; 10],
    ring_timeout: Option<String>,
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self::from_outcome(&PollOutcome::Unavailable)
    }
}

impl DisplayModel {
    pub fn from_outcome(outcome: &PollOutcome) -> Self {
        match outcome {
            PollOutcome::Success(snapshot) => Self::populated(snapshot),
            PollOutcome::Unavailable => Self {
                mode: ViewMode::Placeholder,
                values: std::array::from_fn(|_| UNAVAILABLE_TEXT.to_string()),
                ring_timeout: None,
            },
        }
    }

    fn populated(snapshot: &StatusSnapshot) -> Self {
        let light_status = if snapshot.light_on() { "ON" } else { "OFF" };
        let values = Field::ALL.map(|field| match field {
            Field::Time => snapshot.time.clone(),
            Field::LightStatus => light_status.to_string(),
            Field::LastLightTime => snapshot.last_light_time.clone(),
            Field::Brightness => snapshot.brightness.to_string(),
            Field::DoorStatus => snapshot.door_status.clone(),
            Field::LastDoorTime => snapshot.last_door_time.clone(),
            Field::LastMotionTime => snapshot.last_motion_time.clone(),
            Field::Temperature => with_unit(snapshot.temperature, TEMPERATURE_SUFFIX),
            Field::Humidity => with_unit(snapshot.humidity, HUMIDITY_SUFFIX),
            Field::ServerUptime => snapshot.server_uptime.clone(),
        });

        Self {
            mode: ViewMode::Populated,
            values,
            ring_timeout: Some(snapshot.timeout.clone()).filter(|text| !text.is_empty()),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn placeholder_visible(&self) -> bool {
        self.mode == ViewMode::Placeholder
    }

    pub fn populated_visible(&self) -> bool {
        self.mode == ViewMode::Populated
    }

    /// LED ring timeout state, shown alongside the populated panel when reported.
    pub fn ring_timeout(&self) -> Option<&str> {
        self.ring_timeout.as_deref()
    }

    pub fn placeholder_message(&self) -> Option<&'static str> {
        self.placeholder_visible().then_some(PLACEHOLDER_MESSAGE)
    }
}

/// A missing reading renders as empty text without its unit.
fn with_unit(reading: Option<f64>, suffix: &str) -> String {
    reading
        .map(|value| format!("{value}{suffix}"))
        .unwrap_or_default()
}
