//! Deterministic debate policies.
//!
//! Drop-in replacements for the model-backed policies: no model calls, same
//! ports. Useful offline and wherever repeatable debates matter.

use crate::ports::debate_agent::AgentProfile;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::next_action::NextActionDescriber;
use crate::ports::score_extractor::ScoreExtractor;
use crate::ports::selection_policy::SelectionPolicy;
use async_trait::async_trait;
use debate_domain::{History, Turn, find_score};

/// Rotates through the roster in order.
///
/// The next speaker is the agent after the most recent agent turn; when no
/// agent has spoken yet, the first agent in the roster opens.
pub struct RoundRobinSelection;

#[async_trait]
impl SelectionPolicy for RoundRobinSelection {
    async fn select(
        &self,
        history: &History,
        agents: &[AgentProfile],
    ) -> Result<Option<String>, GatewayError> {
        let last_index = history.iter().rev().find_map(|turn| {
            agents
                .iter()
                .position(|a| turn.name() == Some(a.name.as_str()))
        });

        let next = match last_index {
            Some(i) => agents.get((i + 1) % agents.len()),
            None => agents.first(),
        };
        Ok(next.map(|a| a.name.clone()))
    }
}

/// Finds the score in the critique text itself.
pub struct PatternScoreExtractor;

#[async_trait]
impl ScoreExtractor for PatternScoreExtractor {
    async fn extract(&self, critique: &str) -> Result<Option<f64>, GatewayError> {
        Ok(find_score(critique))
    }
}

/// Reports which agent just spoke and how many turns the debate has.
pub struct StaticNextActionDescriber;

#[async_trait]
impl NextActionDescriber for StaticNextActionDescriber {
    async fn describe(&self, turns: &[Turn]) -> Result<String, GatewayError> {
        Ok(match turns.last() {
            Some(turn) => format!(
                "{}: Finished turn {} of the debate",
                turn.speaker().to_uppercase(),
                turns.len()
            ),
            None => "Debate has not started".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::Role;

    fn agents() -> Vec<AgentProfile> {
        vec![
            AgentProfile::new("Writer", ""),
            AgentProfile::new("Critic", ""),
        ]
    }

    #[tokio::test]
    async fn test_round_robin_opens_with_first_agent() {
        let mut history = History::new();
        history.append(Role::User, None, "Write a sonnet");
        let next = RoundRobinSelection.select(&history, &agents()).await.unwrap();
        assert_eq!(next.as_deref(), Some("Writer"));
    }

    #[tokio::test]
    async fn test_round_robin_alternates() {
        let mut history = History::new();
        history.append(Role::Assistant, Some("Writer".to_string()), "draft");
        let next = RoundRobinSelection.select(&history, &agents()).await.unwrap();
        assert_eq!(next.as_deref(), Some("Critic"));

        history.append(Role::Assistant, Some("Critic".to_string()), "6/10");
        let next = RoundRobinSelection.select(&history, &agents()).await.unwrap();
        assert_eq!(next.as_deref(), Some("Writer"));
    }

    #[tokio::test]
    async fn test_round_robin_empty_roster() {
        let next = RoundRobinSelection.select(&History::new(), &[]).await.unwrap();
        assert_eq!(next, None);
    }

    #[tokio::test]
    async fn test_pattern_extractor() {
        assert_eq!(
            PatternScoreExtractor.extract("Good flow. 8/10").await.unwrap(),
            Some(8.0)
        );
        assert_eq!(
            PatternScoreExtractor
                .extract("Great work, no score given.")
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_static_describer() {
        let mut history = History::new();
        history.append(Role::Assistant, Some("Writer".to_string()), "draft");
        let status = StaticNextActionDescriber
            .describe(history.turns())
            .await
            .unwrap();
        assert_eq!(status, "WRITER: Finished turn 1 of the debate");
    }
}
