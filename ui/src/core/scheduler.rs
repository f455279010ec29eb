//! Refresh timers.
//!
//! Reloads come from three places: once when the dashboard mounts, from the
//! refresh button, and from a periodic [`Ticker`]. A second, unrelated ticker
//! only repaints the "last updated" status line. Each ticker owns a
//! [`CancelHandle`]; [`RefreshScheduler::teardown`] stops both when the
//! dashboard unmounts.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::core::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    Manual,
    Periodic,
}

impl RefreshTrigger {
    /// Manual and periodic refreshes hide the previous error before the new
    /// attempt.
    pub fn clears_error(&self) -> bool {
        matches!(self, RefreshTrigger::Manual | RefreshTrigger::Periodic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshTrigger::Startup => "startup",
            RefreshTrigger::Manual => "manual",
            RefreshTrigger::Periodic => "periodic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RefreshPolicy {
    pub refresh_every_ms: u64,
    pub status_every_ms: u64,
    /// Pause before the progress fill moves to its target width.
    pub progress_delay_ms: u64,
    /// How long a clicked risk item stays highlighted.
    pub flash_ms: u64,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            refresh_every_ms: 5 * 60 * 1000,
            status_every_ms: 30 * 1000,
            progress_delay_ms: 500,
            flash_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fixed-period timer. The first tick fires one full period after `run`
/// starts; ticks are numbered from 1.
#[derive(Debug, Clone)]
pub struct Ticker {
    period_ms: u64,
    cancel: CancelHandle,
}

impl Ticker {
    pub fn new(period_ms: u64) -> Self {
        Self::with_handle(period_ms, CancelHandle::default())
    }

    pub fn with_handle(period_ms: u64, cancel: CancelHandle) -> Self {
        Self { period_ms, cancel }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub async fn run(self, mut on_tick: impl FnMut(u64)) {
        let mut tick = 0u64;
        loop {
            timing::sleep_ms(self.period_ms).await;
            if self.cancel.is_cancelled() {
                debug!(period_ms = self.period_ms, ticks = tick, "ticker stopped");
                break;
            }
            tick += 1;
            trace!(period_ms = self.period_ms, tick, "tick");
            on_tick(tick);
        }
    }
}

/// Owns the two dashboard timers.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    policy: RefreshPolicy,
    refresh: CancelHandle,
    status: CancelHandle,
}

impl RefreshScheduler {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            refresh: CancelHandle::default(),
            status: CancelHandle::default(),
        }
    }

    pub fn policy(&self) -> &RefreshPolicy {
        &self.policy
    }

    pub fn refresh_ticker(&self) -> Ticker {
        Ticker::with_handle(self.policy.refresh_every_ms, self.refresh.clone())
    }

    pub fn status_ticker(&self) -> Ticker {
        Ticker::with_handle(self.policy.status_every_ms, self.status.clone())
    }

    pub fn teardown(&self) {
        self.refresh.cancel();
        self.status.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.refresh.is_cancelled() && self.status.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::time::{sleep, Duration, Instant};

    fn recorder() -> (Arc<Mutex<Vec<(u64, u128)>>>, impl FnMut(u64) + Send + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let started = Instant::now();
        let sink = log.clone();
        let on_tick = move |n| {
            sink.lock()
                .unwrap()
                .push((n, started.elapsed().as_millis()));
        };
        (log, on_tick)
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_ticker_fires_every_five_minutes() {
        let scheduler = RefreshScheduler::new(RefreshPolicy::default());
        let (log, on_tick) = recorder();
        tokio::spawn(scheduler.refresh_ticker().run(on_tick));

        sleep(Duration::from_millis(3 * 300_000 + 10)).await;
        let ticks = log.lock().unwrap().clone();
        assert_eq!(ticks.len(), 3);
        for (n, at_ms) in ticks {
            let due = u128::from(n) * 300_000;
            assert!(at_ms >= due && at_ms <= due + 5, "tick {n} fired at {at_ms} ms");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn status_ticker_runs_independently() {
        let scheduler = RefreshScheduler::new(RefreshPolicy::default());
        let (refresh_log, on_refresh) = recorder();
        let (status_log, on_status) = recorder();
        tokio::spawn(scheduler.refresh_ticker().run(on_refresh));
        tokio::spawn(scheduler.status_ticker().run(on_status));

        sleep(Duration::from_millis(299_000)).await;
        assert!(refresh_log.lock().unwrap().is_empty());
        assert_eq!(status_log.lock().unwrap().len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_stops_both_tickers() {
        let scheduler = RefreshScheduler::new(RefreshPolicy::default());
        let (refresh_log, on_refresh) = recorder();
        let (status_log, on_status) = recorder();
        tokio::spawn(scheduler.refresh_ticker().run(on_refresh));
        tokio::spawn(scheduler.status_ticker().run(on_status));

        sleep(Duration::from_millis(61_000)).await;
        assert_eq!(status_log.lock().unwrap().len(), 2);

        scheduler.teardown();
        assert!(scheduler.is_torn_down());
        sleep(Duration::from_millis(900_000)).await;
        assert_eq!(status_log.lock().unwrap().len(), 2);
        assert!(refresh_log.lock().unwrap().is_empty());
    }

    #[test]
    fn refreshes_clear_error_startup_does_not() {
        assert!(RefreshTrigger::Manual.clears_error());
        assert!(RefreshTrigger::Periodic.clears_error());
        assert!(!RefreshTrigger::Startup.clears_error());
    }
}
