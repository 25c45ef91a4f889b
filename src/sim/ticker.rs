use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Fixed-period ticker
// ---------------------------------------------------------------------------

/// Turns elapsed wall-clock time into a whole number of fixed-period ticks.
/// Leftover time carries to the next call, so the tick rate does not depend
/// on how often the host loop calls in.
#[derive(Debug, Clone)]
pub struct FixedTicker {
    period: Duration,
    max_catch_up: u32,
    accumulated: Duration,
}

impl FixedTicker {
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        Self { period, max_catch_up: max_catch_up.max(1), accumulated: Duration::ZERO }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `elapsed` and return the number of ticks now due.
    ///
    /// At most `max_catch_up` ticks are returned per call; any backlog beyond
    /// that is dropped down to the sub-period remainder.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.period && due < self.max_catch_up {
            self.accumulated -= self.period;
            due += 1;
        }
        if self.accumulated >= self.period {
            let rem = self.accumulated.as_nanos() % self.period.as_nanos();
            self.accumulated = Duration::from_nanos(rem as u64);
        }
        due
    }

    /// Time until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.accumulated)
    }
}

// ---------------------------------------------------------------------------
// Scoped timer handle
// ---------------------------------------------------------------------------

/// A running physics timer. Exists only while the simulation is Running;
/// dropping it cancels the schedule.
#[derive(Debug)]
pub struct TickTimer {
    ticker: FixedTicker,
    last_poll: Instant,
}

impl TickTimer {
    pub fn start(period: Duration, max_catch_up: u32) -> Self {
        tracing::debug!(period_ms = period.as_millis() as u64, "tick timer started");
        Self {
            ticker: FixedTicker::new(period, max_catch_up),
            last_poll: Instant::now(),
        }
    }

    /// Ticks due for an explicit elapsed duration.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.ticker.advance(elapsed)
    }

    /// Ticks due since the previous poll, measured against `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_poll);
        self.last_poll = now;
        self.ticker.advance(elapsed)
    }

    pub fn until_next(&self) -> Duration {
        self.ticker.until_next()
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        tracing::debug!("tick timer cancelled");
    }
}
