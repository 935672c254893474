use std::cell::RefCell;
use std::rc::Rc;

use vigil_protocol::{EntityRef, StatusResponse};

use crate::feed::{ActivityFeedSnapshot, FeedDecoder};
use crate::status::EntityStatusReport;

/// What woke the poller up.
///
/// Carried for logging; both triggers behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTrigger {
    /// The user switched to the activity tab.
    TabActivated,
    /// The page loaded with an activity indicator already mid-spin.
    PageLoadSpinning,
}

impl std::fmt::Display for PollTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollTrigger::TabActivated => write!(f, "tab_activated"),
            PollTrigger::PageLoadSpinning => write!(f, "page_load_spinning"),
        }
    }
}

/// User-chosen feed filter, sent with every request of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedFilter {
    pub show_all: bool,
}

/// One-shot actions latched for the next terminal transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingTerminalActions {
    reload: bool,
}

impl PendingTerminalActions {
    /// Consume the reload latch.
    pub(crate) fn take_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload)
    }
}

/// Per-view poll session state.
///
/// Exactly one logical session exists per (view, entity). All fields are
/// private: the single-flight guard and run counter are engine-owned
/// invariants, not knobs.
#[derive(Debug)]
pub struct PollSession {
    entity: EntityRef,
    endpoint_url: String,
    pub(crate) in_progress: bool,
    pub(crate) run_count: u32,
    pub(crate) last_fingerprint: i32,
    filter: FeedFilter,
    pub(crate) pending: PendingTerminalActions,
}

/// Sessions are shared between the view (which triggers and configures)
/// and the running poll loop. Scheduling is single-threaded cooperative,
/// so a non-atomic handle is the honest representation.
pub type SharedPollSession = Rc<RefCell<PollSession>>;

impl PollSession {
    pub fn new(entity: EntityRef, endpoint_url: impl Into<String>) -> Self {
        Self {
            entity,
            endpoint_url: endpoint_url.into(),
            in_progress: false,
            run_count: 0,
            last_fingerprint: 0,
            filter: FeedFilter::default(),
            pending: PendingTerminalActions::default(),
        }
    }

    pub fn into_shared(self) -> SharedPollSession {
        Rc::new(RefCell::new(self))
    }

    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Whether a request or scheduled continuation is currently in flight.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Poll iterations of the current (or last) continuous loop.
    pub fn run_count(&self) -> u32 {
        self.run_count
    }

    /// Fingerprint of the last feed fragment received.
    pub fn last_fingerprint(&self) -> i32 {
        self.last_fingerprint
    }

    pub fn show_all(&self) -> bool {
        self.filter.show_all
    }

    /// Flip the "show all activities" filter. Takes effect on the next
    /// request; an in-flight request is not re-issued.
    pub fn set_show_all(&mut self, show_all: bool) {
        self.filter.show_all = show_all;
    }

    /// Latch a full page reload for the terminal transition.
    ///
    /// Set by the operation-submission collaborator when the server
    /// answers an operation with a reload directive.
    pub fn latch_reload(&mut self) {
        self.pending.reload = true;
    }
}

/// Everything one poll iteration learned from the server.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub feed: ActivityFeedSnapshot,
    /// Operation-button list fragment, for views that render it.
    pub ops: Option<String>,
    /// Per-disk operation list fragment, for views that render it.
    pub disk_ops: Option<String>,
    pub report: EntityStatusReport,
}

impl StatusSnapshot {
    pub fn from_wire(response: StatusResponse, decoder: &dyn FeedDecoder) -> Self {
        let report = EntityStatusReport::from(&response);
        Self {
            feed: ActivityFeedSnapshot::decode(response.activities, decoder),
            ops: response.ops,
            disk_ops: response.disk_ops,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::MarkerFeedDecoder;
    use vigil_protocol::EntityStatus;

    #[test]
    fn test_new_session_starts_idle() {
        let session = PollSession::new(EntityRef::machine("42"), "/machines/42/status");
        assert!(!session.is_in_progress());
        assert_eq!(session.run_count(), 0);
        assert_eq!(session.last_fingerprint(), 0);
        assert!(!session.show_all());
    }

    #[test]
    fn test_show_all_toggle() {
        let mut session = PollSession::new(EntityRef::node("n1"), "/nodes/n1/status");
        session.set_show_all(true);
        assert!(session.show_all());
        session.set_show_all(false);
        assert!(!session.show_all());
    }

    #[test]
    fn test_reload_latch_is_one_shot() {
        let mut session = PollSession::new(EntityRef::machine("42"), "/machines/42/status");
        session.latch_reload();
        assert!(session.pending.take_reload());
        assert!(!session.pending.take_reload());
    }

    #[test]
    fn test_snapshot_from_wire() {
        let response = StatusResponse {
            activities: "<li data-code=\"start\"><span class=\"icon-spin\"></span> Starting</li>"
                .to_string(),
            ops: Some("<div>ops</div>".to_string()),
            disk_ops: None,
            is_new_state: true,
            icon: "play".to_string(),
            status: EntityStatus::Pending,
            human_readable_status: "Starting".to_string(),
            connect_uri: None,
        };
        let snapshot = StatusSnapshot::from_wire(response, &MarkerFeedDecoder);
        assert_eq!(snapshot.feed.records.len(), 1);
        assert!(snapshot.feed.has_pending());
        assert_eq!(snapshot.ops.as_deref(), Some("<div>ops</div>"));
        assert!(snapshot.report.is_transitioning);
    }
}
