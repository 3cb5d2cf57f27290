//! Rate limiting for status polls.
//!
//! The timer ticks much faster than polls are allowed to go out. The scheduler
//! claims the interval slot as soon as it decides to poll, so a slow response
//! can never cause a second request inside the same window.

use std::time::Duration;

use tokio::time::Instant;

/// Scheduler-owned bookkeeping for the last issued poll.
#[derive(Debug, Clone, Copy)]
pub struct RefreshState {
    last_refresh: Option<Instant>,
    refresh_interval: Duration,
}

impl RefreshState {
    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

#[derive(Debug)]
pub struct RefreshScheduler {
    state: RefreshState,
}

impl RefreshScheduler {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            state: RefreshState {
                last_refresh: None,
                refresh_interval,
            },
        }
    }

    pub fn state(&self) -> &RefreshState {
        &self.state
    }

    /// Returns true when a poll should be issued for this tick.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let due = match self.state.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.state.refresh_interval,
        };
        if due {
            self.state.last_refresh = Some(now);
        }
        due
    }

    /// Claim a slot unconditionally. Used for the startup poll.
    pub fn force_poll(&mut self, now: Instant) {
        self.state.last_refresh = Some(now);
    }
}
