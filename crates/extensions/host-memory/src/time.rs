//! Test clocks and schedulers.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};

use pagelight_protocols::time::{Clock, Scheduler};

/// Clock pinned to a settable instant.
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    /// Clock reading `now` until advanced.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.write();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read()
    }
}

/// Scheduler whose sleeps return immediately.
///
/// Requested delays are recorded so tests can assert the stagger without
/// waiting for it.
#[derive(Default)]
pub struct NoDelayScheduler {
    requested: Mutex<Vec<Duration>>,
}

impl NoDelayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl Scheduler for NoDelayScheduler {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().push(duration);
    }
}
