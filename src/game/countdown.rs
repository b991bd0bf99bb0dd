//! Cancellable one-second countdown
//!
//! Each armed countdown runs as its own tokio task, the way the server's
//! background watchers do. Cancellation is signalled through a `watch`
//! channel and observed no later than the next tick boundary.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum CountdownEvent {
    Tick { remaining: u32 },
    Expired,
}

struct ArmedCountdown {
    cancel: watch::Sender<bool>,
    task: JoinHandle<()>,
}

/// At most one running countdown; arming again cancels the previous one
#[derive(Default)]
pub struct Countdown {
    armed: Option<ArmedCountdown>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `seconds`
    ///
    /// `on_event` receives one `Tick` per second with the seconds left
    /// (reaching 0), then a single `Expired`. Must be called from within a
    /// tokio runtime.
    pub fn arm<F>(&mut self, seconds: u32, mut on_event: F)
    where
        F: FnMut(CountdownEvent) + Send + 'static,
    {
        self.cancel();

        let (cancel, mut cancelled) = watch::channel(false);
        let task = tokio::spawn(async move {
            let mut remaining = seconds;
            let mut ticker = interval_at(Instant::now() + TICK, TICK);

            while remaining > 0 {
                tokio::select! {
                    biased;
                    // Err means the handle was dropped, which also cancels
                    _ = cancelled.changed() => return,
                    _ = ticker.tick() => {}
                }

                if *cancelled.borrow() {
                    return;
                }

                remaining -= 1;
                on_event(CountdownEvent::Tick { remaining });

                // cancel() may have run while the callback was busy
                if *cancelled.borrow() {
                    return;
                }
            }

            on_event(CountdownEvent::Expired);
        });

        tracing::debug!("Countdown armed for {} seconds", seconds);
        self.armed = Some(ArmedCountdown { cancel, task });
    }

    /// Stop the running countdown, if any; no further events are emitted
    pub fn cancel(&mut self) {
        if let Some(armed) = self.armed.take() {
            if !armed.task.is_finished() {
                tracing::debug!("Countdown cancelled");
            }
            let _ = armed.cancel.send(true);
        }
    }

    pub fn is_active(&self) -> bool {
        self.armed
            .as_ref()
            .map(|a| !a.task.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Countdown")
            .field("active", &self.is_active())
            .finish()
    }
}

/// "Time left: 05 seconds."
pub fn time_left_text(seconds: u32) -> String {
    format!("Time left: {:02} seconds.", seconds)
}

pub const TIME_UP_TEXT: &str = "Time is up!";
