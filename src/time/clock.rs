use chrono::{DateTime, Utc};

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application logic does **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The instant is always UTC; clock-in timestamps are rendered as epoch
///   milliseconds, so no timezone concept is needed.
/// - This trait represents an **external capability**, similar to the
///   transport or the warning sink.
///
/// # Typical Implementations
/// - `SystemClock`: Uses the OS / runtime clock
/// - `FixedClock`: Returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current instant as a [`DateTime<Utc>`].
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Test implementation of `Clock` that always returns a fixed instant.
    struct FixedClock {
        instant: DateTime<Utc>,
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.instant
        }
    }

    #[test]
    fn fixed_clock_returns_given_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 10, 2, 9, 30, 0).unwrap();
        let clock = FixedClock { instant };

        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn clock_trait_object_works() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock { instant });

        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn epoch_millis_rendering_is_non_empty() {
        let instant = Utc.with_ymd_and_hms(2025, 10, 2, 9, 30, 0).unwrap();
        let clock = FixedClock { instant };

        let rendered = clock.now().timestamp_millis().to_string();
        assert!(!rendered.is_empty());
    }
}
