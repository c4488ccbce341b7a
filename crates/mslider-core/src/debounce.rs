#![forbid(unsafe_code)]

//! Cancellable one-shot deadlines.
//!
//! A [`Debouncer`] models "do X once `duration` has elapsed, unless cancelled
//! first". The host drives time: it calls [`Debouncer::poll`] from its tick
//! with the current instant, so there is no background timer and no
//! callback re-entering the owner.
//!
//! # State Machine
//!
//! ```text
//! Idle --arm(now)--> Armed --poll(now >= deadline)--> Idle (fires once)
//!                      |
//!                      +--cancel()--> Idle (never fires)
//! ```
//!
//! Re-arming an armed debouncer restarts the window.

use web_time::{Duration, Instant};

/// One-shot deadline with explicit cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create an idle debouncer with the given window.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Window length.
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the window; an armed deadline keeps its original expiry.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Start (or restart) the window at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    /// Drop a pending deadline. Returns `true` if one was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is pending.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, or `None` when idle.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire if the deadline has passed.
    ///
    /// Returns `true` exactly once per armed window.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_250: Duration = Duration::from_millis(250);

    #[test]
    fn fires_once_after_window() {
        let t = Instant::now();
        let mut d = Debouncer::new(MS_250);
        assert!(!d.is_armed());
        d.arm(t);
        assert!(!d.poll(t + MS_100));
        assert!(d.poll(t + MS_250));
        assert!(!d.poll(t + MS_250 + MS_100));
        assert!(!d.is_armed());
    }

    #[test]
    fn cancel_prevents_firing() {
        let t = Instant::now();
        let mut d = Debouncer::new(MS_250);
        d.arm(t);
        assert!(d.cancel());
        assert!(!d.poll(t + MS_250));
        assert!(!d.cancel());
    }

    #[test]
    fn rearm_restarts_window() {
        let t = Instant::now();
        let mut d = Debouncer::new(MS_250);
        d.arm(t);
        d.arm(t + MS_100);
        assert!(!d.poll(t + MS_250));
        assert!(d.poll(t + MS_250 + MS_100));
    }

    #[test]
    fn remaining_counts_down() {
        let t = Instant::now();
        let mut d = Debouncer::new(MS_250);
        assert_eq!(d.remaining(t), None);
        d.arm(t);
        assert_eq!(d.remaining(t + MS_100), Some(Duration::from_millis(150)));
        assert_eq!(d.remaining(t + MS_250 + MS_100), Some(Duration::ZERO));
    }

    #[test]
    fn zero_window_fires_immediately() {
        let t = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        d.arm(t);
        assert!(d.poll(t));
    }
}
