/// Port trait for surfacing user-visible warnings.
///
/// This trait represents an **abstraction over the warning channel**.
/// Implementations may emit warnings via:
///
/// - `tracing` (production)
/// - An in-memory recorder (tests)
///
/// ## Design notes
///
/// - This trait is intentionally **minimal**: it accepts a message and
///   returns nothing. Whether a warning *should* be emitted is the
///   application layer's decision.
/// - Emitting a warning is a side effect that tests must be able to
///   observe independently of any returned error.
///
/// ## Thread safety
///
/// Implementations must be:
/// - `Send`: usable across thread boundaries
/// - `Sync`: safely shared via `Arc`
pub trait WarningSink: Send + Sync {
    /// Emits a single warning message.
    fn warn(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A test double for `WarningSink`.
    ///
    /// Records all messages passed to it, allowing tests to verify that:
    ///
    /// - `warn` is called the expected number of times
    /// - The exact message text is passed
    #[derive(Default)]
    struct RecordingWarningSink {
        messages: Mutex<Vec<String>>,
    }

    impl WarningSink for RecordingWarningSink {
        fn warn(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn warning_sink_contract_records_messages() {
        let sink = RecordingWarningSink::default();

        sink.warn("something happened");

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0], "something happened");
    }

    #[test]
    fn warning_sink_can_be_shared_across_threads() {
        let sink: Arc<dyn WarningSink> = Arc::new(RecordingWarningSink::default());
        let clone = sink.clone();

        sink.warn("first");
        clone.warn("second");
    }
}
