use std::time::{Duration, Instant};

/// Polled fixed-period timer. Each call to [`Ticker::update`] compares the
/// supplied clock reading against the last fire; nothing runs in the
/// background.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    last_fire: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last_fire: now,
        }
    }

    /// Returns true at most once per call when a full period has elapsed.
    /// The next period is measured from `now`, so a stalled frame driver
    /// yields a single fire rather than a burst.
    pub fn update(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fire) >= self.period {
            self.last_fire = now;
            true
        } else {
            false
        }
    }
}
