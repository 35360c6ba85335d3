//! Notification port.
//!
//! The toast surface. Fire-and-forget; the wizard never waits on it.

pub trait NotifierPort: Send + Sync {
    /// Positive confirmation (e.g. "activation submitted").
    fn success(&self, message: &str);

    /// Destructive notification (e.g. a failed submission).
    fn destructive(&self, message: &str);
}
