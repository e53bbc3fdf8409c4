//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate.

use super::debate_agent::AgentProfile;
use debate_domain::{Selection, SessionId, StopReason, TerminationDecision, Turn};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, web UI, etc.)
pub trait DebateProgressNotifier: Send + Sync {
    /// Called once before the first selection
    fn on_debate_start(&self, session: &SessionId, agents: &[AgentProfile]);

    /// Called when the next speaker has been chosen
    fn on_speaker_selected(&self, selection: &Selection);

    /// Called after a turn has been appended to the history
    fn on_turn(&self, turn: &Turn);

    /// Called after every termination check
    fn on_evaluation(&self, _decision: &TerminationDecision) {}

    /// Called when the loop exits; `None` when it failed
    fn on_debate_end(&self, _reason: Option<StopReason>) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_debate_start(&self, _session: &SessionId, _agents: &[AgentProfile]) {}
    fn on_speaker_selected(&self, _selection: &Selection) {}
    fn on_turn(&self, _turn: &Turn) {}
}
