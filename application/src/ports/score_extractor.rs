//! Score extraction port

use super::llm_gateway::GatewayError;
use async_trait::async_trait;

/// Extracts a numeric quality score from a critique.
///
/// `Ok(None)` means no score could be found; the termination evaluator
/// treats that as "threshold not met". `Err` is reserved for upstream
/// failures, which abort the debate.
#[async_trait]
pub trait ScoreExtractor: Send + Sync {
    async fn extract(&self, critique: &str) -> Result<Option<f64>, GatewayError>;
}
