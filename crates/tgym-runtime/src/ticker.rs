//! Fixed-rate pacing.
//!
//! [`Ticker`] keeps an absolute deadline one period ahead and waits on the
//! cancellation token until it passes. Render time therefore does not
//! accumulate drift. When the loop falls behind by more than a period the
//! missed deadlines are skipped, never replayed as a burst.

use web_time::{Duration, Instant};

use crate::cancellation::CancellationToken;

/// Why [`Ticker::wait`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The deadline passed; run the next tick.
    Tick,
    /// Cancellation was requested while waiting.
    Cancelled,
}

/// Deadline-based fixed-rate clock.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
    skipped: u64,
}

impl Ticker {
    const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Start a ticker whose first deadline is one `period` from now.
    ///
    /// Periods below one millisecond are raised to one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(Self::MIN_PERIOD);
        Self {
            period,
            next: Instant::now() + period,
            skipped: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Total deadlines skipped because the loop fell behind.
    #[inline]
    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Block until the next deadline or cancellation, whichever is first.
    pub fn wait(&mut self, token: &CancellationToken) -> Wake {
        if token.wait_until(self.next) {
            return Wake::Cancelled;
        }
        self.schedule(Instant::now());
        Wake::Tick
    }

    fn schedule(&mut self, now: Instant) {
        self.next += self.period;
        if self.next > now {
            return;
        }
        let behind = now.duration_since(self.next);
        let missed = (behind.as_nanos() / self.period.as_nanos()) as u64 + 1;
        self.skipped += missed;
        self.next += self.period * u32::try_from(missed).unwrap_or(u32::MAX);
        tracing::trace!(missed, "ticker fell behind");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancellation::CancellationSource;

    #[test]
    fn period_floor() {
        assert_eq!(Ticker::new(Duration::ZERO).period(), Duration::from_millis(1));
        assert_eq!(
            Ticker::new(Duration::from_millis(33)).period(),
            Duration::from_millis(33)
        );
    }

    #[test]
    fn waits_roughly_one_period() {
        let source = CancellationSource::new();
        let mut ticker = Ticker::new(Duration::from_millis(20));
        let start = Instant::now();
        assert_eq!(ticker.wait(&source.token()), Wake::Tick);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn cancelled_before_wait() {
        let source = CancellationSource::new();
        source.cancel();
        let mut ticker = Ticker::new(Duration::from_secs(60));
        let start = Instant::now();
        assert_eq!(ticker.wait(&source.token()), Wake::Cancelled);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn missed_deadlines_are_skipped() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        let origin = ticker.next;
        // Pretend the loop stalled for 55ms past the first deadline.
        ticker.schedule(origin + Duration::from_millis(55));
        assert_eq!(ticker.skipped(), 5);
        assert!(ticker.next > origin + Duration::from_millis(55));
        assert!(ticker.next <= origin + Duration::from_millis(70));
    }

    #[test]
    fn on_time_schedule_advances_one_period() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        let origin = ticker.next;
        ticker.schedule(origin);
        assert_eq!(ticker.next, origin + Duration::from_millis(10));
        assert_eq!(ticker.skipped(), 0);
    }
}
