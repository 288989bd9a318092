//! Wall-clock abstraction feeding `SessionEnv`.
//!
//! The core only ever sees `Millis`; swapping the clock lets tests drive
//! sessions with fixed timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

use schulte_core::Millis;

pub trait Clock: Send + Sync {
    fn now(&self) -> Millis;
}

/// Production clock: epoch milliseconds from the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        Millis(chrono::Utc::now().timestamp_millis().max(0) as u64)
    }
}

/// Manually stepped clock for tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.load(Ordering::SeqCst))
    }
}
