//! The board's seven repeating timers.
//!
//! Opening the settings overlay stops the whole set; closing it starts a
//! fresh set. Fetch timers fire immediately on start so reopening the board
//! never shows stale panels for a full period, while the two rotation timers
//! wait out their first period so the entry on screen isn't skipped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};

// ── timer identities ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerAction {
    ClockTick,
    RotateStatus,
    RotateNews,
    FetchStatus,
    FetchWeather,
    FetchNews,
    FetchSchedule,
}

impl TimerAction {
    pub const ALL: [TimerAction; 7] = [
        TimerAction::ClockTick,
        TimerAction::RotateStatus,
        TimerAction::RotateNews,
        TimerAction::FetchStatus,
        TimerAction::FetchWeather,
        TimerAction::FetchNews,
        TimerAction::FetchSchedule,
    ];

    pub fn period(self) -> Duration {
        match self {
            TimerAction::ClockTick => Duration::from_secs(1),
            TimerAction::RotateStatus => Duration::from_secs(5),
            TimerAction::RotateNews => Duration::from_secs(4),
            TimerAction::FetchStatus => Duration::from_secs(60),
            TimerAction::FetchWeather => Duration::from_secs(600),
            TimerAction::FetchNews => Duration::from_secs(30),
            TimerAction::FetchSchedule => Duration::from_secs(30),
        }
    }

    /// Rotation timers wait a full period before their first tick; everything
    /// else ticks as soon as the set starts.
    fn fires_immediately(self) -> bool {
        !matches!(self, TimerAction::RotateStatus | TimerAction::RotateNews)
    }
}

// ── the set ──────────────────────────────────────────────────────────────────

/// Owns the spawned timer tasks and the sending half of their channel.
/// `start` is idempotent: it always tears down the previous set first, so
/// there is never more than one live timer per action.
pub struct TimerSet {
    tx: mpsc::Sender<TimerAction>,
    handles: Vec<JoinHandle<()>>,
}

impl TimerSet {
    pub fn new(tx: mpsc::Sender<TimerAction>) -> Self {
        Self {
            tx,
            handles: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.stop_all();
        for action in TimerAction::ALL {
            let tx = self.tx.clone();
            self.handles.push(tokio::spawn(async move {
                let period = action.period();
                let mut tick = if action.fires_immediately() {
                    interval(period)
                } else {
                    interval_at(Instant::now() + period, period)
                };
                tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
                loop {
                    tick.tick().await;
                    if tx.send(action).await.is_err() {
                        break;
                    }
                }
            }));
        }
    }

    pub fn stop_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.stop_all();
    }
}
