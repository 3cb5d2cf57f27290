use std::sync::Arc;

use nursery_monitor_client::device_client::DeviceClient;
use nursery_monitor_client::monitor::{spawn_stdin_reader, Monitor};
use nursery_monitor_client::view::TerminalPresenter;
use nursery_monitor_client::{Config, MonitorError};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MonitorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().await;
    let client = Arc::new(DeviceClient::new(&config)?);
    info!(device = %client.base_url(), "Device client ready");

    let (actions_tx, actions_rx) = mpsc::channel(16);
    // Never joined; exit does not wait on a pending stdin read.
    spawn_stdin_reader(actions_tx)?;

    let monitor = Monitor::new(
        &config,
        client.clone(),
        client,
        TerminalPresenter::stdout(),
    );

    monitor
        .run(actions_rx, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "Failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await
}
