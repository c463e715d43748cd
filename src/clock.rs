//! Clock injection.
//!
//! The core never reads ambient time; `now` always arrives as a parameter.
//! These types let the calling layer supply that parameter as a capability:
//! `SystemClock` in production, `ManualClock` in tests, where cooldowns can
//! be crossed without real wall-clock waits.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

/// Source of the current wall-clock time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```rust
/// use resend_gate::{Clock, ManualClock};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// let start = Utc::now();
/// let mut clock = ManualClock::new(start);
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::from_secs(60));
/// assert_eq!(clock.now() - start, chrono::Duration::seconds(60));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    current: DateTime<Utc>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: start }
    }

    /// Move the clock forward by `step`.
    pub fn advance(&mut self, step: Duration) {
        let millis = step.as_millis().min(i64::MAX as u128) as i64;
        self.current = self.current + ChronoDuration::milliseconds(millis);
    }

    /// Jump the clock to an absolute time. May move backwards.
    pub fn set(&mut self, now: DateTime<Utc>) {
        self.current = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.current
    }
}
