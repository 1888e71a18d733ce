//! Activation of the app shell.
//!
//! [`activate`] issues the one-shot load requests and hands back a
//! [`PeriodicSync`] task together with the [`ActiveSession`] that owns its
//! lifetime. The task is executor-agnostic: run it on a tokio task or on a
//! UI framework's scope task. Once the session is deactivated (or dropped)
//! the task dispatches nothing further and returns.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::store::{Dispatch, StateSource};

/// Period between two sync requests
pub const SYNC_INTERVAL: Duration = Duration::from_millis(20_000);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Dispatch the activation-time loads and prepare the periodic sync.
///
/// `load_notes` is dispatched before `load_categories`; neither is awaited.
pub fn activate<D, S>(
    dispatch: D,
    source: S,
    period: Duration,
) -> (ActiveSession, PeriodicSync<S, D>)
where
    D: Dispatch,
    S: StateSource,
{
    tracing::info!("Activating shell (sync every {:?})", period);
    dispatch.load_notes();
    dispatch.load_categories();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let session = ActiveSession {
        shutdown: shutdown_tx,
    };
    let task = PeriodicSync {
        period: period.max(MIN_PERIOD),
        source,
        dispatch,
        shutdown: shutdown_rx,
    };
    (session, task)
}

/// Handle that keeps the periodic sync alive.
#[derive(Debug)]
pub struct ActiveSession {
    shutdown: watch::Sender<bool>,
}

impl ActiveSession {
    /// Stop the periodic sync. Idempotent.
    ///
    /// No `sync_state` is dispatched after this returns.
    pub fn deactivate(&self) {
        let was_deactivated = self.shutdown.send_replace(true);
        if !was_deactivated {
            tracing::info!("Shell deactivated; periodic sync stopped");
        }
    }

    /// Whether [`deactivate`](Self::deactivate) has not been called yet
    pub fn is_active(&self) -> bool {
        !*self.shutdown.borrow()
    }
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Recurring task pushing the current state to the sync handler
pub struct PeriodicSync<S, D> {
    period: Duration,
    source: S,
    dispatch: D,
    shutdown: watch::Receiver<bool>,
}

impl<S, D> PeriodicSync<S, D>
where
    S: StateSource,
    D: Dispatch,
{
    /// Period between ticks
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Run until the owning session is deactivated.
    ///
    /// The first tick fires one full period after the call. Returns the
    /// number of sync requests dispatched.
    pub async fn run(mut self) -> u64 {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut dispatched = 0u64;

        loop {
            if self.is_stopped() {
                break;
            }

            tokio::select! {
                biased;

                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                }
                _ = interval.tick() => {
                    if self.is_stopped() {
                        break;
                    }
                    let payload = self.source.sync_payload();
                    tracing::debug!(
                        notes = payload.notes.len(),
                        categories = payload.categories.len(),
                        "Dispatching periodic sync"
                    );
                    self.dispatch.sync_state(payload);
                    dispatched += 1;
                }
            }
        }

        tracing::debug!("Periodic sync finished after {dispatched} dispatches");
        dispatched
    }

    fn is_stopped(&self) -> bool {
        *self.shutdown.borrow() || self.shutdown.has_changed().is_err()
    }
}
