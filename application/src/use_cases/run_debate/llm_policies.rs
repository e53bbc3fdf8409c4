//! Model-backed debate policies.
//!
//! | Policy | Model role | Prompt |
//! |--------|-----------|--------|
//! | [`LlmSelectionPolicy`] | executor | [`PromptTemplate::speaker_selection`] |
//! | [`LlmScoreExtractor`] | utility | [`PromptTemplate::score_extraction`] |
//! | [`LlmNextActionDescriber`] | utility | [`PromptTemplate::next_action`] |

use crate::ports::debate_agent::AgentProfile;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::next_action::NextActionDescriber;
use crate::ports::score_extractor::ScoreExtractor;
use crate::ports::selection_policy::SelectionPolicy;
use async_trait::async_trait;
use debate_domain::{History, ModelRole, PromptTemplate, Turn, parse_score, render_turns};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Asks the executor model to name the next speaker.
pub struct LlmSelectionPolicy<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    temperature: f32,
}

impl<G: LlmGateway + 'static> LlmSelectionPolicy<G> {
    pub fn new(gateway: Arc<G>, temperature: f32) -> Self {
        Self {
            gateway,
            temperature,
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> SelectionPolicy for LlmSelectionPolicy<G> {
    async fn select(
        &self,
        history: &History,
        agents: &[AgentProfile],
    ) -> Result<Option<String>, GatewayError> {
        let definitions = agents
            .iter()
            .map(AgentProfile::summary_line)
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = PromptTemplate::speaker_selection(&definitions, &history.render());

        let output = self
            .gateway
            .complete(
                CompletionRequest::prompt(ModelRole::Executor, prompt)
                    .with_temperature(self.temperature),
            )
            .await?;
        info!("Speaker selector output: {}", output);

        let output = output.trim();
        Ok((!output.is_empty()).then(|| output.to_string()))
    }
}

/// Asks the utility model for the score contained in a critique.
pub struct LlmScoreExtractor<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    temperature: f32,
}

impl<G: LlmGateway + 'static> LlmScoreExtractor<G> {
    pub fn new(gateway: Arc<G>, temperature: f32) -> Self {
        Self {
            gateway,
            temperature,
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> ScoreExtractor for LlmScoreExtractor<G> {
    async fn extract(&self, critique: &str) -> Result<Option<f64>, GatewayError> {
        let output = self
            .gateway
            .complete(
                CompletionRequest::prompt(
                    ModelRole::Utility,
                    PromptTemplate::score_extraction(critique),
                )
                .with_temperature(self.temperature),
            )
            .await?;
        info!("Critic evaluation: {}", output.trim());

        let score = parse_score(&output);
        if score.is_none() {
            warn!(output = %output.trim(), "Score extraction returned a non-numeric value");
        }
        Ok(score)
    }
}

/// Asks the utility model to summarize the predicted next step.
pub struct LlmNextActionDescriber<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    temperature: f32,
}

impl<G: LlmGateway + 'static> LlmNextActionDescriber<G> {
    pub fn new(gateway: Arc<G>, temperature: f32) -> Self {
        Self {
            gateway,
            temperature,
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> NextActionDescriber for LlmNextActionDescriber<G> {
    async fn describe(&self, turns: &[Turn]) -> Result<String, GatewayError> {
        let output = self
            .gateway
            .complete(
                CompletionRequest::prompt(
                    ModelRole::Utility,
                    PromptTemplate::next_action(&render_turns(turns)),
                )
                .with_temperature(self.temperature),
            )
            .await?;
        debug!("Next action: {}", output);
        Ok(output.trim().trim_matches('"').to_string())
    }
}
