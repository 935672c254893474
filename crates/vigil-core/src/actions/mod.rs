//! One-shot actions at poll session termination.
//!
//! Runs once per terminal transition, after the notification gate. A
//! latched page reload wins over everything; otherwise a machine whose
//! newest activity is a recognized boot signal gets the one-time "first
//! successful boot" hint. The hint additionally requires that the loop
//! ran more than one iteration; a single-shot poll never reveals it.

use tracing::info;

use crate::config::PollerConfig;
use crate::feed::ActivityFeedSnapshot;
use crate::profile::ViewProfile;
use crate::session::ViewSink;

/// What the dispatcher did at termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    None,
    PageReloaded,
    BootHintRevealed,
}

/// Execute the terminal actions for a finished session.
pub fn dispatch_terminal_actions(
    reload_latched: bool,
    feed: &ActivityFeedSnapshot,
    run_count: u32,
    profile: &ViewProfile,
    config: &PollerConfig,
    sink: &mut dyn ViewSink,
) -> TerminalAction {
    if reload_latched {
        info!(event = "core.actions.page_reload", view = profile.name);
        sink.reload_page();
        return TerminalAction::PageReloaded;
    }

    if profile.boot_hint && run_count > 1 && feed.records.len() > 1 {
        if let Some(newest) = feed.newest() {
            if config.is_boot_signal(&newest.code) {
                info!(
                    event = "core.actions.boot_hint_revealed",
                    code = newest.code,
                    runs = run_count,
                );
                sink.reveal_boot_hint();
                return TerminalAction::BootHintRevealed;
            }
        }
    }

    TerminalAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{ActivityOutcome, ActivityRecord};
    use crate::status::Affordances;

    #[derive(Default)]
    struct TestSink {
        reloaded: bool,
        hint_revealed: bool,
    }

    impl ViewSink for TestSink {
        fn apply_feed(&mut self, _fragment: &str) {}
        fn apply_ops(&mut self, _fragment: &str) {}
        fn apply_disk_ops(&mut self, _fragment: &str) {}
        fn apply_affordances(&mut self, _affordances: &Affordances) {}
        fn reveal_boot_hint(&mut self) {
            self.hint_revealed = true;
        }
        fn reload_page(&mut self) {
            self.reloaded = true;
        }
    }

    fn feed_with(newest_code: &str, len: usize) -> ActivityFeedSnapshot {
        let mut records = vec![ActivityRecord {
            code: newest_code.to_string(),
            outcome: ActivityOutcome::Success,
            rendered: format!("{} done", newest_code),
        }];
        for i in 1..len {
            records.push(ActivityRecord {
                code: format!("older-{}", i),
                outcome: ActivityOutcome::Success,
                rendered: "older".to_string(),
            });
        }
        ActivityFeedSnapshot {
            raw: String::new(),
            records,
        }
    }

    #[test]
    fn test_reload_latch_wins_and_skips_hint() {
        let mut sink = TestSink::default();
        let action = dispatch_terminal_actions(
            true,
            &feed_with("wakeup", 2),
            3,
            &ViewProfile::machine_detail(),
            &PollerConfig::default(),
            &mut sink,
        );
        assert_eq!(action, TerminalAction::PageReloaded);
        assert!(sink.reloaded);
        assert!(!sink.hint_revealed);
    }

    #[test]
    fn test_boot_hint_revealed_after_multiple_runs() {
        let mut sink = TestSink::default();
        let action = dispatch_terminal_actions(
            false,
            &feed_with("wakeup", 2),
            2,
            &ViewProfile::machine_detail(),
            &PollerConfig::default(),
            &mut sink,
        );
        assert_eq!(action, TerminalAction::BootHintRevealed);
        assert!(sink.hint_revealed);
        assert!(!sink.reloaded);
    }

    #[test]
    fn test_single_shot_poll_never_reveals_hint() {
        let mut sink = TestSink::default();
        let action = dispatch_terminal_actions(
            false,
            &feed_with("wakeup", 2),
            1,
            &ViewProfile::machine_detail(),
            &PollerConfig::default(),
            &mut sink,
        );
        assert_eq!(action, TerminalAction::None);
        assert!(!sink.hint_revealed);
    }

    #[test]
    fn test_hint_requires_more_than_one_record() {
        let mut sink = TestSink::default();
        let action = dispatch_terminal_actions(
            false,
            &feed_with("wakeup", 1),
            3,
            &ViewProfile::machine_detail(),
            &PollerConfig::default(),
            &mut sink,
        );
        assert_eq!(action, TerminalAction::None);
    }

    #[test]
    fn test_unrecognized_code_reveals_nothing() {
        let mut sink = TestSink::default();
        let action = dispatch_terminal_actions(
            false,
            &feed_with("reboot", 2),
            2,
            &ViewProfile::machine_detail(),
            &PollerConfig::default(),
            &mut sink,
        );
        assert_eq!(action, TerminalAction::None);
    }

    #[test]
    fn test_hint_disabled_for_views_without_it() {
        let mut sink = TestSink::default();
        let action = dispatch_terminal_actions(
            false,
            &feed_with("wakeup", 2),
            2,
            &ViewProfile::list(),
            &PollerConfig::default(),
            &mut sink,
        );
        assert_eq!(action, TerminalAction::None);
    }
}
