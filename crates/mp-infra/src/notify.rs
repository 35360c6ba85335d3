//! Tracing-based notifier.
//!
//! The real toast widget lives in the UI layer; this adapter records the
//! same notifications as structured log events.

use tracing::{info, warn};

use mp_core::ports::NotifierPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotifierPort for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "portal::notify", message, "toast");
    }

    fn destructive(&self, message: &str) {
        warn!(target: "portal::notify", message, "toast");
    }
}
