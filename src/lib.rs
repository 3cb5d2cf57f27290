//! Client for the nursery monitor device.
//!
//! Polls the device's `/status` endpoint on a rate-limited schedule, renders
//! each outcome into a display model and sends fire-and-forget light commands.

pub mod commands;
pub mod config;
pub mod device_client;
pub mod monitor;
pub mod scheduler;
pub mod types;
pub mod view;

pub use config::Config;
pub use types::MonitorError;
