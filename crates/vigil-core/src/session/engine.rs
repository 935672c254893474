//! The poll loop.
//!
//! One engine instance serves one view; the per-entity state lives in
//! [`PollSession`]. A session's lifecycle is
//! `Idle -> Polling(run=1) -> Polling(run=n+1)* -> Idle`: the only way
//! into `Polling` is [`PollEngine::activate`] on an idle session, and the
//! loop leaves it when the continuation predicate fails (terminal
//! success) or the transport errors (silent abort).
//!
//! There is no cancellation and no request timeout. Tearing down a view
//! while a request is outstanding does not stop the loop; the eventual
//! response is still applied to the sink. This mirrors the behavior the
//! dashboard has always had, and the sink contract requires tolerating it.

use tracing::{debug, info, warn};

use crate::actions::{self, TerminalAction};
use crate::config::PollerConfig;
use crate::feed::FeedDecoder;
use crate::focus;
use crate::notify;
use crate::profile::ViewProfile;
use crate::transport::StatusTransport;

use super::step::{self, NextPoll, StepPlan};
use super::types::{PollTrigger, SharedPollSession, StatusSnapshot};
use super::ViewSink;

/// How an activation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// A loop was already in flight for this session; nothing was done.
    AlreadyInFlight,
    /// The transport failed; the session went idle without terminal
    /// actions. The next external trigger starts fresh.
    TransportAborted,
    /// The continuation predicate ended the loop normally.
    Completed(TerminalReport),
}

/// What happened at the terminal transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalReport {
    /// Poll iterations the loop ran.
    pub runs: u32,
    /// Message the notification gate produced (None while focused or for
    /// an empty feed). Delivery is best-effort and separately gated by
    /// [`PollerConfig::notifications_enabled`].
    pub notification: Option<String>,
    pub action: TerminalAction,
}

/// The shared poll engine, parametrized per view.
pub struct PollEngine<T: StatusTransport, D: FeedDecoder> {
    transport: T,
    decoder: D,
    profile: ViewProfile,
    config: PollerConfig,
}

impl<T: StatusTransport, D: FeedDecoder> PollEngine<T, D> {
    pub fn new(transport: T, decoder: D, profile: ViewProfile) -> Self {
        Self::with_config(transport, decoder, profile, PollerConfig::default())
    }

    pub fn with_config(
        transport: T,
        decoder: D,
        profile: ViewProfile,
        config: PollerConfig,
    ) -> Self {
        Self {
            transport,
            decoder,
            profile,
            config,
        }
    }

    pub fn profile(&self) -> &ViewProfile {
        &self.profile
    }

    /// Run one poll session to termination.
    ///
    /// If the session is already in flight this is a no-op returning
    /// [`ActivationOutcome::AlreadyInFlight`]; the request that eventually
    /// completes is whichever one was already out. Otherwise the loop
    /// polls until no activity is pending (terminal success) or the
    /// transport fails (silent abort), then returns.
    pub async fn activate(
        &self,
        session: &SharedPollSession,
        sink: &mut dyn ViewSink,
        trigger: PollTrigger,
    ) -> ActivationOutcome {
        let (entity, endpoint) = {
            let mut s = session.borrow_mut();
            if s.in_progress {
                debug!(
                    event = "core.poll.activate_ignored",
                    entity = %s.entity(),
                    trigger = %trigger,
                );
                return ActivationOutcome::AlreadyInFlight;
            }
            s.in_progress = true;
            s.run_count = 1;
            (s.entity().clone(), s.endpoint_url().to_string())
        };

        info!(
            event = "core.poll.session_started",
            entity = %entity,
            view = self.profile.name,
            trigger = %trigger,
        );

        loop {
            let show_all = session.borrow().show_all();
            let response = match self.transport.fetch(&endpoint, show_all).await {
                Ok(response) => response,
                Err(e) => {
                    session.borrow_mut().in_progress = false;
                    warn!(
                        event = "core.poll.transport_failed",
                        entity = %entity,
                        error = %e,
                    );
                    return ActivationOutcome::TransportAborted;
                }
            };

            let snapshot = StatusSnapshot::from_wire(response, &self.decoder);
            let plan = {
                let mut s = session.borrow_mut();
                step::evaluate_response(&mut s, &snapshot, &self.profile)
            };
            self.apply_render(sink, &plan, &snapshot);

            match plan.next {
                NextPoll::Continue { delay } => {
                    debug!(
                        event = "core.poll.rescheduled",
                        entity = %entity,
                        run = session.borrow().run_count(),
                        delay_ms = delay.as_millis() as u64,
                    );
                    tokio::time::sleep(delay).await;
                }
                NextPoll::Terminate => {
                    let (runs, reload) = {
                        let mut s = session.borrow_mut();
                        s.in_progress = false;
                        (s.run_count, s.pending.take_reload())
                    };

                    let notification =
                        notify::terminal_notification(focus::is_window_focused(), &snapshot.feed);
                    if self.config.notifications_enabled {
                        if let Some(message) = &notification {
                            notify::send_notification(message);
                        }
                    }

                    let action = actions::dispatch_terminal_actions(
                        reload,
                        &snapshot.feed,
                        runs,
                        &self.profile,
                        &self.config,
                        sink,
                    );

                    info!(
                        event = "core.poll.session_completed",
                        entity = %entity,
                        runs = runs,
                    );
                    return ActivationOutcome::Completed(TerminalReport {
                        runs,
                        notification,
                        action,
                    });
                }
            }
        }
    }

    /// Apply one iteration's render directives.
    ///
    /// The feed is gated by its fingerprint; auxiliary fragments and
    /// affordances are re-applied every iteration.
    fn apply_render(&self, sink: &mut dyn ViewSink, plan: &StepPlan, snapshot: &StatusSnapshot) {
        if plan.feed_changed {
            sink.apply_feed(&snapshot.feed.raw);
        }
        if self.profile.ops_fragment {
            if let Some(ops) = &snapshot.ops {
                sink.apply_ops(ops);
            }
        }
        if self.profile.disk_ops_fragment {
            if let Some(disk_ops) = &snapshot.disk_ops {
                sink.apply_disk_ops(disk_ops);
            }
        }
        sink.apply_affordances(&plan.affordances);
    }
}
