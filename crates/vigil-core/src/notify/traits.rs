//! Notification backend abstraction.

use super::errors::NotifyError;

/// A platform-specific way to deliver a desktop notification.
pub trait NotificationBackend: Send + Sync {
    /// Short backend name for logs and tests.
    fn name(&self) -> &'static str;

    /// Whether this backend can deliver notifications on this host.
    ///
    /// This doubles as the permission probe: it is consulted lazily on the
    /// first attempted send, and a `false` answer is a silent no-op at the
    /// call site, never an error.
    fn is_available(&self) -> bool;

    /// Deliver one notification.
    fn send(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}
