//! Cancellable repeating timer for a single-threaded event loop.
//!
//! There is no thread and no callback: the loop asks the slot how long it
//! may sleep, then asks whether the timer fired. A slot holds at most one
//! timer, and arming always replaces (cancels) the previous one.

use std::time::{Duration, Instant};

/// A repeating deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Instant,
}

impl RepeatingTimer {
    /// First fire is one period after `now`.
    pub fn start(now: Instant, period: Duration) -> Self {
        RepeatingTimer {
            period,
            next_due: now + period,
        }
    }
}

/// Holder for the one timer a view may have running.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimerSlot {
    timer: Option<RepeatingTimer>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is running, then start a fresh timer.
    pub fn arm(&mut self, now: Instant, period: Duration) {
        self.cancel();
        self.timer = Some(RepeatingTimer::start(now, period));
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// How long the loop may wait before the next fire. None when disarmed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|t| t.next_due.saturating_duration_since(now))
    }

    /// Fire at most once if the deadline has passed, rescheduling one period
    /// from `now`. Missed periods are not replayed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.timer.as_mut() {
            Some(timer) if now >= timer.next_due => {
                timer.next_due = now + timer.period;
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
