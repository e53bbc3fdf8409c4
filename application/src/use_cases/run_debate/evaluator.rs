//! Termination evaluator: decides whether the debate stops after a turn.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::score_extractor::ScoreExtractor;
use debate_domain::{DebateSettings, TerminationDecision, TerminationState, Turn};
use std::sync::Arc;
use tracing::{info, warn};

/// Owns one session's [`TerminationState`] and scores critique turns.
///
/// Invoked once per loop iteration. Only turns from evaluated agents go
/// through score extraction; every invocation advances the counter.
/// Create a new evaluator for every debate.
pub struct TerminationEvaluator {
    extractor: Arc<dyn ScoreExtractor>,
    state: TerminationState,
    settings: DebateSettings,
    behavior: BehaviorConfig,
}

impl TerminationEvaluator {
    pub fn new(
        extractor: Arc<dyn ScoreExtractor>,
        settings: &DebateSettings,
        behavior: BehaviorConfig,
    ) -> Self {
        Self {
            extractor,
            state: TerminationState::new(settings.max_iterations, settings.passing_score),
            settings: settings.clone(),
            behavior,
        }
    }

    /// Evaluate the turn that was just appended.
    pub async fn evaluate(&mut self, latest: &Turn) -> Result<TerminationDecision, GatewayError> {
        info!(
            "Iteration: {} of {}",
            self.state.iteration() + 1,
            self.state.max_iterations()
        );

        let score = match latest.name() {
            Some(name) if self.settings.is_evaluated(name) => {
                let score = self.behavior.bound(self.extractor.extract(latest.content())).await?;
                if score.is_none() {
                    warn!(agent = %name, "No evaluation score found, continuing");
                }
                score
            }
            _ => None,
        };

        let decision = self.state.record(score);
        info!(
            iteration = decision.iteration,
            score = ?decision.score,
            "Should terminate: {}",
            decision.should_terminate()
        );
        Ok(decision)
    }

    pub fn iteration(&self) -> usize {
        self.state.iteration()
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }
}
