//! The pure per-response decision step.
//!
//! Everything the loop decides about one response happens here, with no
//! IO: fingerprint update, affordance derivation, and the continuation
//! predicate. The engine only sequences the effects.

use std::time::Duration;

use crate::backoff;
use crate::fingerprint;
use crate::profile::ViewProfile;
use crate::status::{self, Affordances};

use super::types::{PollSession, StatusSnapshot};

/// What the loop does after applying a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NextPoll {
    Continue { delay: Duration },
    Terminate,
}

/// Render directives plus the scheduling decision for one response.
#[derive(Debug, Clone)]
pub(crate) struct StepPlan {
    /// The feed fragment's fingerprint moved; re-render it.
    pub feed_changed: bool,
    pub affordances: Affordances,
    pub next: NextPoll,
}

/// Fold one response into the session and plan the next move.
///
/// The fingerprint is updated on every response, changed or not. The
/// continuation predicate is re-derived from the feed just received,
/// never from prior UI state.
pub(crate) fn evaluate_response(
    session: &mut PollSession,
    snapshot: &StatusSnapshot,
    profile: &ViewProfile,
) -> StepPlan {
    let new_fingerprint = fingerprint::fingerprint(&snapshot.feed.raw);
    let feed_changed = fingerprint::should_rerender(session.last_fingerprint, new_fingerprint);
    session.last_fingerprint = new_fingerprint;

    let affordances = status::reconcile(&snapshot.report, profile);

    let next = if snapshot.feed.has_pending() {
        session.run_count += 1;
        NextPoll::Continue {
            delay: backoff::delay(session.run_count),
        }
    } else {
        NextPoll::Terminate
    };

    StepPlan {
        feed_changed,
        affordances,
        next,
    }
}
