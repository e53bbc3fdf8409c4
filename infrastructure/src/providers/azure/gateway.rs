//! Azure OpenAI chat-completion gateway

use super::transport::AzureTransport;
use async_trait::async_trait;
use debate_application::{ChatMessage, CompletionRequest, GatewayError, LlmGateway};
use debate_domain::ModelRole;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Deployment names backing the two model roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureDeployments {
    pub executor: String,
    pub utility: String,
}

impl AzureDeployments {
    pub fn new(executor: impl Into<String>, utility: impl Into<String>) -> Self {
        Self {
            executor: executor.into(),
            utility: utility.into(),
        }
    }

    pub fn for_role(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::Executor => &self.executor,
            ModelRole::Utility => &self.utility,
        }
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    messages: Vec<&'a ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// LLM gateway over the Azure OpenAI chat-completions API.
///
/// Each [`ModelRole`] is routed to its own deployment on the same resource.
pub struct AzureOpenAiGateway {
    transport: Arc<AzureTransport>,
    deployments: AzureDeployments,
}

impl AzureOpenAiGateway {
    pub fn new(transport: Arc<AzureTransport>, deployments: AzureDeployments) -> Self {
        info!(
            endpoint = %transport.connection().endpoint,
            executor = %deployments.executor,
            utility = %deployments.utility,
            "AzureOpenAiGateway initialized"
        );
        Self {
            transport,
            deployments,
        }
    }

    pub fn deployments(&self) -> &AzureDeployments {
        &self.deployments
    }
}

#[async_trait]
impl LlmGateway for AzureOpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let deployment = self.deployments.for_role(request.model);
        let system = request.system.as_deref().map(ChatMessage::system);

        let body = ChatCompletionBody {
            messages: system.iter().chain(request.messages.iter()).collect(),
            temperature: request.temperature,
        };

        debug!(
            deployment,
            messages = body.messages.len(),
            "Sending chat completion"
        );
        let response: ChatCompletionResponse = self
            .transport
            .post_json(&format!("deployments/{}/chat/completions", deployment), &body)
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("no choices returned".to_string()))?;

        // A null content is an empty answer, not a malformed response
        Ok(choice.message.content.unwrap_or_default())
    }
}
