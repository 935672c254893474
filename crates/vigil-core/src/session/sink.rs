//! The seam between the poll engine and the rendering layer.

use crate::status::Affordances;

/// Applies poll results to a view.
///
/// The engine decides *what* changed; implementations decide how that
/// looks. Calls arrive in a fixed order per iteration: feed fragment
/// (only when its fingerprint moved), auxiliary fragments (every
/// iteration the view has them), then affordances (every iteration).
/// `reveal_boot_hint` and `reload_page` fire at most once, at session
/// termination.
///
/// Implementations must tolerate calls after the view lost relevance:
/// there is no cancellation, so a response that raced a navigation still
/// gets applied to whatever context remains.
pub trait ViewSink {
    /// Replace the rendered activity feed.
    fn apply_feed(&mut self, fragment: &str);

    /// Replace the operation-button list.
    fn apply_ops(&mut self, fragment: &str);

    /// Replace the per-disk operation list.
    fn apply_disk_ops(&mut self, fragment: &str);

    /// Apply the derived UI-affordance flags.
    fn apply_affordances(&mut self, affordances: &Affordances);

    /// Reveal the one-time "first successful boot" hint.
    fn reveal_boot_hint(&mut self);

    /// Perform a full page reload.
    fn reload_page(&mut self);
}
