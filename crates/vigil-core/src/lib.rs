//! vigil-core: the dashboard's activity/status poller
//!
//! This library owns the one piece of the dashboard with real design: the
//! poll loop that watches an entity's activity feed, throttles itself,
//! suppresses redundant redraws, and projects server status into UI
//! affordances. Rendering, dialogs, and CRUD flows live elsewhere and
//! plug in through the [`session::ViewSink`] and
//! [`transport::StatusTransport`] seams.
//!
//! # Main Entry Points
//!
//! - [`session`] - Poll sessions, the engine, and the view sink seam
//! - [`status`] - Status-report reconciliation into affordances
//! - [`fingerprint`] - Whole-feed change detection
//! - [`backoff`] - The adaptive poll delay schedule
//! - [`notify`] - Terminal desktop notifications
//! - [`config`] - Engine tunables

pub mod actions;
pub mod backoff;
pub mod config;
pub mod errors;
pub mod feed;
pub mod fingerprint;
pub mod focus;
pub mod logging;
pub mod notify;
pub mod profile;
pub mod session;
pub mod status;
pub mod transport;

// Re-export wire types and shared domain enums from vigil-protocol
pub use vigil_protocol::{EntityKind, EntityRef, EntityStatus, StatusResponse};

pub use actions::TerminalAction;
pub use config::{ConfigError, PollerConfig};
pub use errors::{VigilError, VigilResult};
pub use feed::{
    ActivityFeedSnapshot, ActivityOutcome, ActivityRecord, FeedDecoder, MarkerFeedDecoder,
};
pub use focus::{is_window_focused, set_window_focused};
pub use notify::NotifyError;
pub use profile::ViewProfile;
pub use session::{
    ActivationOutcome, PollEngine, PollSession, PollTrigger, SharedPollSession, StatusSnapshot,
    TerminalReport, ViewSink,
};
pub use status::{Affordances, EntityStatusReport, IconState};
pub use transport::{HttpStatusTransport, StatusTransport, TransportError};

// Re-export logging initialization
pub use logging::init_logging;
