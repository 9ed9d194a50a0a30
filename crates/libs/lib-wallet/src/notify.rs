//! User-facing alerts

use tracing::warn;

pub const CONNECT_FAILED_ALERT: &str = "Failed to connect to wallet. Please try again.";
pub const SWAP_FAILED_ALERT: &str =
    "Failed to complete swap. Please check your inputs and try again.";

/// Sink for messages the user must acknowledge
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Notifier that only writes a log line, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!(alert = message, "User alert");
    }
}
