//! Background notification at poll termination.
//!
//! Best-effort notifications; failures are logged but never propagate.
//! When a poll session reaches its terminal state while the dashboard
//! window is unfocused, the newest activity is summarized as a one-line
//! desktop notification so the user learns the outcome without switching
//! back.
//!
//! Notifications are dispatched via the [`NotificationBackend`] trait,
//! with platform-specific backends registered in [`registry`]. Permission
//! (backend availability) is probed lazily on the first attempted send and
//! cached; absence is a silent no-op, not an error.

pub mod backends;
pub mod errors;
pub mod registry;
pub mod traits;

pub use errors::NotifyError;
pub use traits::NotificationBackend;

use tracing::{info, warn};

use crate::feed::{ActivityFeedSnapshot, ActivityOutcome};

/// Notification title used for all terminal notifications.
const NOTIFICATION_TITLE: &str = "VIGIL";

/// Decide the terminal notification message, if any.
///
/// Nothing is said while the window is focused, or when the feed carries
/// no records. Otherwise the message is built from the newest record:
/// a failure cross or success check, then the first comma-delimited
/// segment of the record's rendered text.
pub fn terminal_notification(focused: bool, feed: &ActivityFeedSnapshot) -> Option<String> {
    if focused {
        return None;
    }
    let newest = feed.newest()?;
    let prefix = match newest.outcome {
        ActivityOutcome::Failure => "\u{274c} ",
        _ => "\u{2713} ",
    };
    let summary = newest
        .rendered
        .split(',')
        .next()
        .unwrap_or("")
        .trim();
    Some(format!("{}{}", prefix, summary))
}

/// Send a platform-native desktop notification (best-effort).
///
/// Dispatches to the first available [`NotificationBackend`] via the
/// registry. Failures are logged at warn level but never returned as
/// errors.
pub fn send_notification(message: &str) {
    info!(
        event = "core.notify.send_started",
        title = NOTIFICATION_TITLE,
        message = message,
    );

    match registry::send_via_backend(NOTIFICATION_TITLE, message) {
        Ok(true) => {
            info!(event = "core.notify.send_completed", message = message);
        }
        Ok(false) => {
            // Permission not granted or no backend; logged in registry
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                message = message,
                error = %e,
            );
        }
    }
}
