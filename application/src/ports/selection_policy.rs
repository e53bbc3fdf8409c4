//! Speaker selection policy port

use super::debate_agent::AgentProfile;
use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use debate_domain::History;

/// Decides which agent speaks next.
///
/// Returns the raw choice (`None` when the policy produced nothing). The
/// caller resolves it against the roster and applies the fallback agent,
/// so implementations do not need to validate names.
#[async_trait]
pub trait SelectionPolicy: Send + Sync {
    async fn select(
        &self,
        history: &History,
        agents: &[AgentProfile],
    ) -> Result<Option<String>, GatewayError>;
}
