//! Poll sessions and the shared poll engine.
//!
//! A [`PollSession`] is the per-(view, entity) state: the single-flight
//! guard, the run counter, the last feed fingerprint, the user's feed
//! filter, and any latched terminal actions. The [`PollEngine`] drives a
//! session through one continuous poll loop; the [`ViewSink`] trait is
//! where the (out of scope) rendering layer plugs in.

pub mod engine;
pub mod sink;
pub(crate) mod step;
pub mod types;

pub use engine::{ActivationOutcome, PollEngine, TerminalReport};
pub use sink::ViewSink;
pub use types::{
    FeedFilter, PendingTerminalActions, PollSession, PollTrigger, SharedPollSession,
    StatusSnapshot,
};
