//! Time abstraction for testability.
//!
//! Request signing binds every request to the instant it was built. This
//! module provides a [`Clock`] trait so that instant can be pinned in tests
//! while production code reads the real system clock.

use chrono::{DateTime, Utc};

/// Abstraction over UTC wall-clock time.
///
/// # Example
///
/// ```
/// use yellowcard::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let now = clock.now();
/// assert!(now.timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock using the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
///
/// Every call to [`Clock::now`] returns the same value, which makes the
/// generated authentication headers reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// A clock that can be moved forward between calls.
    struct SteppingClock {
        secs: AtomicI64,
    }

    impl SteppingClock {
        fn new(initial_secs: i64) -> Self {
            Self {
                secs: AtomicI64::new(initial_secs),
            }
        }

        fn advance(&self, secs: i64) {
            self.secs.fetch_add(secs, Ordering::SeqCst);
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp(self.secs.load(Ordering::SeqCst), 0).unwrap()
        }
    }

    #[test]
    fn system_clock_returns_current_time() {
        let clock = SystemClock;
        let before = Utc::now();
        let result = clock.now();
        let after = Utc::now();

        assert!(result >= before);
        assert!(result <= after);
    }

    #[test]
    fn system_clock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemClock>();
    }

    #[test]
    fn fixed_clock_never_moves() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 14, 16, 20, 0).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn arc_clock_delegates() {
        let clock = Arc::new(SteppingClock::new(0));
        let shared: Arc<SteppingClock> = Arc::clone(&clock);

        assert_eq!(shared.now().timestamp(), 0);

        clock.advance(100);
        assert_eq!(shared.now().timestamp(), 100);

        clock.advance(50);
        assert_eq!(shared.now().timestamp(), 150);
    }
}
