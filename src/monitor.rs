//! Event loop wiring the refresh scheduler, the status view and user commands.
//!
//! The loop is the single owner of the scheduler and the view. Polls run in
//! spawned tasks and report back over a channel; whichever response arrives
//! last is what gets displayed.

use std::future::Future;
use std::io::{self, BufRead};
use std::str::FromStr;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::commands::{Command, CommandSender};
use crate::config::Config;
use crate::device_client::{CommandTransport, StatusSource};
use crate::scheduler::RefreshScheduler;
use crate::types::MonitorError;
use crate::view::{PollOutcome, Presenter, StatusView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Command(Command),
    Quit,
}

impl FromStr for UserAction {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Ok(UserAction::Quit),
            other => other.parse().map(UserAction::Command),
        }
    }
}

pub struct Monitor<P> {
    scheduler: RefreshScheduler,
    view: StatusView,
    source: Arc<dyn StatusSource>,
    commands: CommandSender,
    presenter: P,
    tick_period: Duration,
}

impl<P: Presenter> Monitor<P> {
    pub fn new(
        config: &Config,
        source: Arc<dyn StatusSource>,
        transport: Arc<dyn CommandTransport>,
        presenter: P,
    ) -> Self {
        Self {
            scheduler: RefreshScheduler::new(config.refresh_interval()),
            view: StatusView::new(),
            source,
            commands: CommandSender::new(transport),
            presenter,
            tick_period: config.tick_period(),
        }
    }

    /// Run until `shutdown` resolves or the user quits.
    ///
    /// A closed action channel only stops command handling; polling continues.
    pub async fn run<F>(
        mut self,
        mut actions: mpsc::Receiver<UserAction>,
        shutdown: F,
    ) -> Result<(), MonitorError>
    where
        F: Future<Output = ()>,
    {
        let (poll_tx, mut poll_rx) = mpsc::unbounded_channel();
        tokio::pin!(shutdown);

        info!(
            tick_ms = self.tick_period.as_millis() as u64,
            refresh_ms = self.scheduler.state().refresh_interval().as_millis() as u64,
            "Starting status monitor"
        );
        self.show_current();

        let start = Instant::now();
        self.scheduler.force_poll(start);
        self.spawn_poll(&poll_tx);

        let mut ticker = time::interval_at(start + self.tick_period, self.tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut actions_open = true;

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    break;
                }
                now = ticker.tick() => {
                    if self.scheduler.on_tick(now) {
                        self.spawn_poll(&poll_tx);
                    }
                }
                Some(outcome) = poll_rx.recv() => {
                    self.view.render(&outcome);
                    self.show_current();
                }
                action = actions.recv(), if actions_open => match action {
                    Some(UserAction::Command(command)) => self.commands.dispatch(command),
                    Some(UserAction::Quit) => {
                        info!("Quit requested");
                        break;
                    }
                    None => {
                        debug!("User input closed");
                        actions_open = false;
                    }
                },
            }
        }

        info!("Status monitor stopped");
        Ok(())
    }

    fn spawn_poll(&self, results: &mpsc::UnboundedSender<PollOutcome>) {
        debug!("Polling device status");
        let source = Arc::clone(&self.source);
        let results = results.clone();
        tokio::spawn(async move {
            let outcome = poll_outcome(source.as_ref()).await;
            let _ = results.send(outcome);
        });
    }

    fn show_current(&mut self) {
        if let Err(err) = self.presenter.present(self.view.model()) {
            warn!(error = ?err, "Failed to present status");
        }
    }
}

/// Run one status poll, collapsing every failure into `Unavailable`.
pub async fn poll_outcome(source: &dyn StatusSource) -> PollOutcome {
    match source.fetch_status().await {
        Ok(snapshot) => {
            debug!(
                brightness = snapshot.brightness,
                waking_up = ?snapshot.waking_up,
                timeout = %snapshot.timeout,
                "Status received"
            );
            PollOutcome::Success(snapshot)
        }
        Err(_) => PollOutcome::Unavailable,
    }
}

/// Forward user actions read line by line from `input` until it closes.
///
/// Blocks the calling thread; run it on a dedicated OS thread so a pending
/// read never holds up runtime shutdown.
pub fn forward_actions<R>(input: R, actions: mpsc::Sender<UserAction>)
where
    R: BufRead,
{
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(error = ?err, "Failed to read user input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<UserAction>() {
            Ok(action) => {
                let quit = action == UserAction::Quit;
                if actions.blocking_send(action).is_err() || quit {
                    break;
                }
            }
            Err(err) => warn!(input = %line.trim(), error = %err, "Ignoring input"),
        }
    }
}

/// Start forwarding stdin lines as user actions on their own thread.
pub fn spawn_stdin_reader(
    actions: mpsc::Sender<UserAction>,
) -> Result<thread::JoinHandle<()>, MonitorError> {
    let handle = thread::Builder::new()
        .name("stdin-actions".to_string())
        .spawn(move || forward_actions(io::stdin().lock(), actions))?;
    Ok(handle)
}
