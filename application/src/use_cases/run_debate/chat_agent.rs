//! Chat-completion debate agent

use crate::ports::debate_agent::DebateAgent;
use crate::ports::llm_gateway::{ChatMessage, CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use debate_domain::{AgentDefinition, History};
use std::sync::Arc;
use tracing::debug;

/// A [`DebateAgent`] driven by an [`AgentDefinition`] over the gateway.
///
/// The definition's instructions become the system prompt; the full
/// history is sent as the message list, speaker names included.
pub struct ChatAgent<G: LlmGateway + 'static> {
    definition: AgentDefinition,
    gateway: Arc<G>,
    default_temperature: f32,
}

impl<G: LlmGateway + 'static> ChatAgent<G> {
    pub fn new(definition: AgentDefinition, gateway: Arc<G>) -> Self {
        Self {
            definition,
            gateway,
            default_temperature: 0.0,
        }
    }

    pub fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = temperature;
        self
    }

    pub fn definition(&self) -> &AgentDefinition {
        &self.definition
    }

    fn request(&self, history: &History) -> CompletionRequest {
        let messages = history.iter().map(ChatMessage::from).collect();
        let mut request = CompletionRequest::new(self.definition.model_role(), messages)
            .with_temperature(
                self.definition
                    .temperature_for_role()
                    .unwrap_or(self.default_temperature),
            );
        if !self.definition.instructions.trim().is_empty() {
            request = request.with_system(self.definition.instructions.clone());
        }
        request
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> DebateAgent for ChatAgent<G> {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn description(&self) -> &str {
        &self.definition.description
    }

    async fn produce(&self, history: &History) -> Result<String, GatewayError> {
        debug!(agent = %self.definition.name, turns = history.len(), "Producing turn");
        self.gateway.complete(self.request(history)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{ModelRole, Role};
    use std::sync::Mutex;

    struct EchoGateway {
        last: Mutex<Option<CompletionRequest>>,
    }

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
            let reply = format!("{} messages", request.messages.len());
            *self.last.lock().unwrap() = Some(request);
            Ok(reply)
        }
    }

    #[tokio::test]
    async fn test_chat_agent_sends_history_with_instructions() {
        let gateway = Arc::new(EchoGateway {
            last: Mutex::new(None),
        });
        let definition = AgentDefinition::new("Writer", "Writes")
            .with_instructions("You write concise answers.")
            .with_model(ModelRole::Executor);
        let agent = ChatAgent::new(definition, gateway.clone()).with_default_temperature(0.3);

        let mut history = History::new();
        history.append(Role::User, None, "Explain ownership");
        history.append(Role::Assistant, Some("Critic".to_string()), "Too long. 5/10");

        let reply = agent.produce(&history).await.unwrap();
        assert_eq!(reply, "2 messages");

        let request = gateway.last.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, ModelRole::Executor);
        assert_eq!(request.system.as_deref(), Some("You write concise answers."));
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.messages[1].name.as_deref(), Some("Critic"));
        assert_eq!(agent.profile().name, "Writer");
    }

    #[tokio::test]
    async fn test_chat_agent_without_instructions_has_no_system_prompt() {
        let gateway = Arc::new(EchoGateway {
            last: Mutex::new(None),
        });
        let agent = ChatAgent::new(AgentDefinition::new("Critic", "Reviews"), gateway.clone());
        agent.produce(&History::new()).await.unwrap();

        let request = gateway.last.lock().unwrap().clone().unwrap();
        assert!(request.system.is_none());
    }
}
