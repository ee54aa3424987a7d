use chrono::{DateTime, Utc};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` provides the current UTC instant based on the operating
/// system's clock.
///
/// # Responsibility
/// - Selecting the clock implementation is the responsibility of the
///   **composition root** (the binary that wires the services together).
/// - Application logic should treat `Clock` as a trusted source.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_a_plausible_instant() {
        let clock = SystemClock;

        let now = clock.now();

        // Basic sanity checks:
        // - Year must be reasonable
        // - Epoch millis must be positive and render non-empty
        assert!(now.year() >= 2000);
        assert!(now.timestamp_millis() > 0);
        assert!(!now.timestamp_millis().to_string().is_empty());
    }

    #[test]
    fn consecutive_reads_do_not_go_backwards() {
        let clock = SystemClock;

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
