//! Debate termination state machine.
//!
//! ```text
//!            record(score)              score >= passing
//!   RUNNING ───────────────► RUNNING ─────────────────────► TERMINATED
//!                                  └── iteration >= max ──►
//! ```
//!
//! The counter is incremented before the condition is evaluated, exactly
//! once per [`TerminationState::record`] call.

use serde::Serialize;

/// Why a debate stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The latest critique scored at or above the passing score.
    ScoreThreshold,
    /// The iteration cap was reached.
    IterationLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::ScoreThreshold => "score_threshold",
            StopReason::IterationLimit => "iteration_limit",
        }
    }
}

/// Result of one termination check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerminationDecision {
    /// Counter value after this check (1-based).
    pub iteration: usize,
    /// Score considered by this check, if one was extracted.
    pub score: Option<f64>,
    /// Set when the debate must stop.
    pub reason: Option<StopReason>,
}

impl TerminationDecision {
    pub fn should_terminate(&self) -> bool {
        self.reason.is_some()
    }
}

/// Per-session termination state.
///
/// Never shared between sessions: a fresh state is created for every debate.
#[derive(Debug, Clone)]
pub struct TerminationState {
    iteration: usize,
    max_iterations: usize,
    passing_score: f64,
    stopped: Option<StopReason>,
}

impl TerminationState {
    pub fn new(max_iterations: usize, passing_score: f64) -> Self {
        Self {
            iteration: 0,
            max_iterations,
            passing_score,
            stopped: None,
        }
    }

    /// Record one evaluation and decide whether to stop.
    ///
    /// A score takes precedence over the cap when both fire on the same check.
    pub fn record(&mut self, score: Option<f64>) -> TerminationDecision {
        self.iteration += 1;

        if self.stopped.is_none() {
            let passed = score.is_some_and(|s| s >= self.passing_score);
            self.stopped = if passed {
                Some(StopReason::ScoreThreshold)
            } else if self.iteration >= self.max_iterations {
                Some(StopReason::IterationLimit)
            } else {
                None
            };
        }

        TerminationDecision {
            iteration: self.iteration,
            score,
            reason: self.stopped,
        }
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn passing_score(&self) -> f64 {
        self.passing_score
    }

    pub fn is_terminated(&self) -> bool {
        self.stopped.is_some()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }
}
