//! Fire-and-forget device commands.
//!
//! Each command is a bare GET against a fixed path on the device. The response
//! is never inspected and failures are dropped, so issuing a command has no
//! effect on the status view or the refresh schedule.

use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::device_client::CommandTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Off,
    Brighter,
    Dimmer,
    Wake,
    /// Toggles the LED ring timeout indicator.
    Timeout,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Off,
        Command::Brighter,
        Command::Dimmer,
        Command::Wake,
        Command::Timeout,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Command::Off => "/off",
            Command::Brighter => "/brighter",
            Command::Dimmer => "/dimmer",
            Command::Wake => "/wake",
            Command::Timeout => "/timeout",
        }
    }

    pub fn name(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        Command::ALL
            .into_iter()
            .find(|command| command.name() == normalized)
            .ok_or_else(|| format!("unknown command `{}`", input.trim()))
    }
}

/// Issues one-shot commands to the device without waiting on them.
#[derive(Clone)]
pub struct CommandSender {
    transport: Arc<dyn CommandTransport>,
}

impl CommandSender {
    pub fn new(transport: Arc<dyn CommandTransport>) -> Self {
        Self { transport }
    }

    pub fn turn_off(&self) {
        self.dispatch(Command::Off);
    }

    pub fn increase_brightness(&self) {
        self.dispatch(Command::Brighter);
    }

    pub fn decrease_brightness(&self) {
        self.dispatch(Command::Dimmer);
    }

    pub fn wake(&self) {
        self.dispatch(Command::Wake);
    }

    pub fn toggle_timeout(&self) {
        self.dispatch(Command::Timeout);
    }

    /// Spawn the request and return immediately. Must be called from within a
    /// tokio runtime.
    pub fn dispatch(&self, command: Command) {
        debug!(command = command.name(), "Sending device command");
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            let _ = transport.send_command(command.path()).await;
        });
    }
}
