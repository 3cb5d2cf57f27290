use async_trait::async_trait;

use crate::types::MonitorError;

use super::api_types::StatusSnapshot;

/// Anything that can answer a status poll.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusSnapshot, MonitorError>;
}

/// Anything that can deliver a one-shot GET to a command path.
#[async_trait]
pub trait CommandTransport: Send + Sync {
    async fn send_command(&self, path: &str) -> Result<(), MonitorError>;
}
