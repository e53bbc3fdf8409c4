//! LLM Gateway port
//!
//! Defines the interface for communicating with chat-completion providers.

use async_trait::async_trait;
use debate_domain::{ModelRole, Role, Turn};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One message in a chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            name: None,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            name: None,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            name: None,
            content: content.into(),
        }
    }
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role(),
            name: turn.name().map(str::to_string),
            content: turn.content().to_string(),
        }
    }
}

/// A single chat-completion call against one model role
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: ModelRole,
    pub system: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(model: ModelRole, messages: Vec<ChatMessage>) -> Self {
        Self {
            model,
            system: None,
            messages,
            temperature: 0.0,
        }
    }

    /// Single user-message request
    pub fn prompt(model: ModelRole, prompt: impl Into<String>) -> Self {
        Self::new(model, vec![ChatMessage::user(prompt)])
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with model
/// deployments. Implementations (adapters) live in the infrastructure layer.
/// Connections behind a gateway are shared read-only across debates.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Run one chat completion and return the assistant text
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
