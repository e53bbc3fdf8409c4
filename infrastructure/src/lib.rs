//! Infrastructure layer for agent-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod agents;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use agents::{AgentLoadError, HostedAgent, YamlAgentLoader};
pub use config::{
    ConfigLoader, FileAgentsConfig, FileAzureConfig, FileBehaviorConfig, FileConfig,
    FileLoggingConfig, ResolvedAzureConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{AzureConnection, AzureDeployments, AzureOpenAiGateway, AzureTransport};
