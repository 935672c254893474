//! Activity feed snapshot types and the loop continuation predicate.
//!
//! The feed arrives as one opaque rendered fragment. The poller treats it
//! as a whole for change detection (see [`crate::fingerprint`]) and only
//! needs per-record outcomes for two decisions: whether to keep polling
//! (any record still pending) and what to say in the terminal notification
//! (the newest record). Records are ordered newest-first and never
//! reordered here.

pub mod decoder;

pub use decoder::{FeedDecoder, MarkerFeedDecoder};

/// Outcome of a single logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    Success,
    Failure,
    Pending,
}

/// One activity timeline entry, as decoded from the rendered feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Operation code the server logged for this activity.
    pub code: String,
    pub outcome: ActivityOutcome,
    /// Plain text of the rendered entry.
    pub rendered: String,
}

/// The feed as fetched by one poll iteration: the raw fragment for
/// fingerprinting plus the decoded records, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFeedSnapshot {
    pub raw: String,
    pub records: Vec<ActivityRecord>,
}

impl ActivityFeedSnapshot {
    pub fn decode(raw: impl Into<String>, decoder: &dyn FeedDecoder) -> Self {
        let raw = raw.into();
        let records = decoder.decode(&raw);
        Self { raw, records }
    }

    /// Continuation predicate: keep polling while any record is pending.
    ///
    /// Evaluated against the feed just received, never against prior state.
    pub fn has_pending(&self) -> bool {
        self.records
            .iter()
            .any(|record| record.outcome == ActivityOutcome::Pending)
    }

    /// The most recent activity (index 0).
    pub fn newest(&self) -> Option<&ActivityRecord> {
        self.records.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, outcome: ActivityOutcome) -> ActivityRecord {
        ActivityRecord {
            code: code.to_string(),
            outcome,
            rendered: format!("{} happened", code),
        }
    }

    #[test]
    fn test_has_pending_true_when_any_record_pending() {
        let feed = ActivityFeedSnapshot {
            raw: String::new(),
            records: vec![
                record("reboot", ActivityOutcome::Success),
                record("migrate", ActivityOutcome::Pending),
            ],
        };
        assert!(feed.has_pending());
    }

    #[test]
    fn test_has_pending_false_when_all_settled() {
        let feed = ActivityFeedSnapshot {
            raw: String::new(),
            records: vec![
                record("reboot", ActivityOutcome::Success),
                record("migrate", ActivityOutcome::Failure),
            ],
        };
        assert!(!feed.has_pending());
    }

    #[test]
    fn test_has_pending_false_for_empty_feed() {
        let feed = ActivityFeedSnapshot {
            raw: String::new(),
            records: vec![],
        };
        assert!(!feed.has_pending());
    }

    #[test]
    fn test_newest_is_first_record() {
        let feed = ActivityFeedSnapshot {
            raw: String::new(),
            records: vec![
                record("wakeup", ActivityOutcome::Success),
                record("start", ActivityOutcome::Success),
            ],
        };
        assert_eq!(feed.newest().unwrap().code, "wakeup");
    }
}
