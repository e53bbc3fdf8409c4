//! Next-action status port

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use debate_domain::Turn;

/// Produces the short status line emitted after each turn.
///
/// Observability only: the result never feeds back into selection or
/// termination.
#[async_trait]
pub trait NextActionDescriber: Send + Sync {
    /// Describe the predicted next step given the turns produced so far
    async fn describe(&self, turns: &[Turn]) -> Result<String, GatewayError>;
}
