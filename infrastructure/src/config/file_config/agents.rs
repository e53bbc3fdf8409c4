//! Agent roster configuration from TOML (`[agents]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where agent definitions come from and how they run
///
/// # Example
///
/// ```toml
/// [agents]
/// writer = "agents/writer.yaml"
/// critic = "agents/critic.yaml"
/// critic_hosted = true        # Run the critic through the assistants API
/// poll_interval_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    /// Writer definition file; the bundled definition when unset
    pub writer: Option<PathBuf>,
    /// Critic definition file; the bundled definition when unset
    pub critic: Option<PathBuf>,
    /// Run the critic as a hosted agent instead of a local chat agent
    pub critic_hosted: bool,
    /// Poll interval for hosted runs
    pub poll_interval_ms: u64,
    /// Maximum wait for one hosted run
    pub max_wait_seconds: u64,
}

impl Default for FileAgentsConfig {
    fn default() -> Self {
        Self {
            writer: None,
            critic: None,
            critic_hosted: false,
            poll_interval_ms: 500,
            max_wait_seconds: 300,
        }
    }
}
