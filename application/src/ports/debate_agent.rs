//! Debate agent port
//!
//! A debate agent is one named participant able to produce the next turn
//! from the full history. Agents are shared across sessions and hold no
//! session-scoped state.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use debate_domain::History;

/// Name and description of an agent, as seen by the speaker selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: String,
    pub description: String,
}

impl AgentProfile {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// `name: description` line used in selection prompts
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

/// A debate participant
#[async_trait]
pub trait DebateAgent: Send + Sync {
    /// Unique name within a roster
    fn name(&self) -> &str;

    /// Description given to the speaker selector
    fn description(&self) -> &str;

    /// Produce the content of this agent's next turn, conditioned on `history`.
    ///
    /// The returned text is appended as a whole; an error appends nothing.
    async fn produce(&self, history: &History) -> Result<String, GatewayError>;

    fn profile(&self) -> AgentProfile {
        AgentProfile::new(self.name(), self.description())
    }
}
