use business::domain::notifier::Notifier;
use tracing::warn;

/// Notifier that only records user notices in the log stream.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(target: "cart::notice", notice = message, "user notified");
    }
}
