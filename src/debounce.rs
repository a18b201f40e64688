//! Debounced input
//!
//! A `Debouncer` holds the latest raw value and exposes a settled copy that
//! only changes once the raw value has stayed put for the whole delay.
//! Time is passed in by the caller, so the event loop decides when to poll
//! and tests can step the clock by hand.

use std::time::{Duration, Instant};

/// Default quiet period for the name filter
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Identifies one scheduled timer. A new handle is issued on every `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct PendingTimer<T> {
    handle: TimerHandle,
    deadline: Instant,
    value: T,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    settled: T,
    pending: Option<PendingTimer<T>>,
    next_handle: u64,
}

impl<T: Clone> Debouncer<T> {
    /// The initial value is settled immediately; only later changes wait.
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            settled: initial,
            pending: None,
            next_handle: 0,
        }
    }

    /// Record a new raw value, cancelling whatever timer was running.
    pub fn set(&mut self, value: T, now: Instant) -> TimerHandle {
        self.cancel();

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending = Some(PendingTimer {
            handle,
            deadline: now + self.delay,
            value,
        });
        handle
    }

    /// Drop the pending timer without firing it. Returns its handle.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take().map(|p| p.handle)
    }

    /// Fire the pending timer if its deadline has passed.
    /// Returns true when the settled value changed hands.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(timer) if timer.deadline <= now => {
                self.settled = timer.value;
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// Value waiting for its timer, if any
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    pub fn active_timer(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|p| p.handle)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the pending timer fires (zero if overdue)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|d| d.saturating_duration_since(now))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_value_is_settled() {
        let d = Debouncer::new(String::new(), DEFAULT_DELAY);
        assert_eq!(d.settled(), "");
        assert!(d.pending().is_none());
        assert!(d.deadline().is_none());
    }

    #[test]
    fn test_settles_after_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(String::new(), ms(1000));
        d.set("lee".to_string(), t0);

        assert!(!d.poll(t0 + ms(999)));
        assert_eq!(d.settled(), "");

        assert!(d.poll(t0 + ms(1000)));
        assert_eq!(d.settled(), "lee");
        assert!(d.pending().is_none());
    }

    #[test]
    fn test_rapid_updates_settle_only_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(String::new(), ms(1000));

        d.set("l".to_string(), t0);
        d.set("le".to_string(), t0 + ms(300));
        d.set("lee".to_string(), t0 + ms(600));

        // Past the first deadline, but the timer was restarted
        assert!(!d.poll(t0 + ms(1200)));
        assert_eq!(d.settled(), "");

        assert!(!d.poll(t0 + ms(1599)));
        assert!(d.poll(t0 + ms(1600)));
        assert_eq!(d.settled(), "lee");
    }

    #[test]
    fn test_each_set_issues_new_handle() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(0, ms(10));
        let a = d.set(1, t0);
        let b = d.set(2, t0);
        assert_ne!(a, b);
        assert_eq!(d.active_timer(), Some(b));
    }

    #[test]
    fn test_cancel_never_fires() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(0, ms(10));
        let handle = d.set(5, t0);
        assert_eq!(d.cancel(), Some(handle));
        assert!(!d.poll(t0 + ms(1000)));
        assert_eq!(*d.settled(), 0);
        assert_eq!(d.cancel(), None);
    }

    #[test]
    fn test_poll_without_pending_is_noop() {
        let mut d = Debouncer::new(3, ms(10));
        assert!(!d.poll(Instant::now()));
        assert_eq!(*d.settled(), 3);
    }

    #[test]
    fn test_remaining() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(0, ms(1000));
        assert_eq!(d.remaining(t0), None);
        d.set(1, t0);
        assert_eq!(d.remaining(t0 + ms(400)), Some(ms(600)));
        assert_eq!(d.remaining(t0 + ms(5000)), Some(Duration::ZERO));
    }

    #[test]
    fn test_zero_delay_settles_on_next_poll() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(String::new(), Duration::ZERO);
        d.set("x".to_string(), t0);
        assert!(d.poll(t0));
        assert_eq!(d.settled(), "x");
    }
}
