//! Process-wide window focus state.
//!
//! Flipped by the GUI shell's focus/blur signals; the poller only reads it,
//! and only at loop termination to decide whether a background notification
//! is worth sending. Starts focused.

use std::sync::atomic::{AtomicBool, Ordering};

static WINDOW_FOCUSED: AtomicBool = AtomicBool::new(true);

/// Record a focus or blur signal from the GUI shell.
pub fn set_window_focused(focused: bool) {
    tracing::debug!(event = "core.focus.changed", focused = focused);
    WINDOW_FOCUSED.store(focused, Ordering::Relaxed);
}

/// Whether the dashboard window currently has focus.
pub fn is_window_focused() -> bool {
    WINDOW_FOCUSED.load(Ordering::Relaxed)
}
