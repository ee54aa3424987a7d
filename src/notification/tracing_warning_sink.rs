use tracing::warn;

use crate::notification::warning_sink::WarningSink;

/// `tracing`-based implementation of [`WarningSink`].
///
/// Emits each message at `WARN` level. Whether and where the event is
/// visible depends on the subscriber installed by the composition root.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}
