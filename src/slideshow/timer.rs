//! Periodic schedule for the slideshow advance step.
//!
//! Times are plain milliseconds since boot so the logic runs on the host;
//! the display task turns [`ArtTimer::next_deadline`] into an embassy timer.

/// Fires every `period_ms` until cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArtTimer {
    period_ms: u64,
    next_due: Option<u64>,
}

impl ArtTimer {
    /// A stopped timer. A zero period is bumped to 1 ms.
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            next_due: None,
        }
    }

    /// Arm the timer; the first expiry is one period after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due = Some(now_ms.saturating_add(self.period_ms));
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// When the next expiry is due, if armed.
    pub fn next_deadline(&self) -> Option<u64> {
        self.next_due
    }

    /// Returns `true` once if the timer has expired at `now_ms`, then
    /// re-arms on the next period boundary strictly after `now_ms`.
    ///
    /// Missed periods are dropped rather than replayed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let periods = ((now_ms - due) / self.period_ms).saturating_add(1);
        self.next_due = Some(due.saturating_add(periods.saturating_mul(self.period_ms)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_timer_never_fires() {
        let mut t = ArtTimer::new(100);
        assert!(!t.is_running());
        assert!(!t.poll(1_000_000));
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn fires_once_per_period() {
        let mut t = ArtTimer::new(100);
        t.start(0);
        assert!(!t.poll(99));
        assert!(t.poll(100));
        assert!(!t.poll(150));
        assert_eq!(t.next_deadline(), Some(200));
        assert!(t.poll(200));
    }

    #[test]
    fn late_poll_does_not_burst() {
        let mut t = ArtTimer::new(100);
        t.start(0);
        assert!(t.poll(450));
        assert_eq!(t.next_deadline(), Some(500));
        assert!(!t.poll(499));
    }

    #[test]
    fn cancel_and_restart() {
        let mut t = ArtTimer::new(100);
        t.start(0);
        t.cancel();
        assert!(!t.poll(500));
        t.start(1000);
        assert_eq!(t.next_deadline(), Some(1100));
        assert!(t.poll(1100));
    }

    #[test]
    fn huge_period_saturates_at_end_of_time() {
        let mut t = ArtTimer::new(u64::MAX);
        t.start(1);
        assert_eq!(t.next_deadline(), Some(u64::MAX));
        assert!(t.poll(u64::MAX));
        assert_eq!(t.next_deadline(), Some(u64::MAX));
        assert!(!t.poll(u64::MAX - 1));
    }

    #[test]
    fn one_ms_period_polled_from_far_behind() {
        let mut t = ArtTimer::new(1);
        t.start(0);
        assert!(t.poll(u64::MAX));
        assert_eq!(t.next_deadline(), Some(u64::MAX));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut t = ArtTimer::new(0);
        assert_eq!(t.period_ms(), 1);
        t.start(5);
        assert!(t.poll(6));
    }
}
