//! Debate agent adapters
//!
//! Agents are described in YAML ([`YamlAgentLoader`]) and run either
//! locally through the chat gateway or remotely as a [`HostedAgent`].

mod hosted_agent;
mod yaml_loader;

pub use hosted_agent::HostedAgent;
pub use yaml_loader::{AgentLoadError, YamlAgentLoader};
