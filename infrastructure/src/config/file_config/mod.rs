//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agents;
mod azure;
mod behavior;
mod logging;

pub use agents::FileAgentsConfig;
pub use azure::{
    API_VERSION_ENV, DEFAULT_API_KEY_ENV, DEFAULT_API_VERSION, ENDPOINT_ENV,
    EXECUTOR_DEPLOYMENT_ENV, FileAzureConfig, ResolvedAzureConfig, UTILITY_DEPLOYMENT_ENV,
};
pub use behavior::FileBehaviorConfig;
pub use logging::FileLoggingConfig;

use debate_domain::{ConfigIssue, ConfigIssueCode, DebateSettings, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Azure OpenAI resource and deployments
    pub azure: FileAzureConfig,
    /// Debate loop parameters
    pub debate: DebateSettings,
    /// Agent definitions
    pub agents: FileAgentsConfig,
    /// Model call behavior
    pub behavior: FileBehaviorConfig,
    /// Transcript and diagnostic logs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Credentials are not checked here; see [`FileAzureConfig::resolve`].
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.debate.validate();

        if self.behavior.timeout_seconds == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "behavior.timeout_seconds".to_string(),
                },
                message: "behavior.timeout_seconds cannot be 0".to_string(),
            });
        }

        if self.agents.critic_hosted && self.agents.poll_interval_ms == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "agents.poll_interval_ms".to_string(),
                },
                message: "agents.poll_interval_ms is 0, hosted runs will be polled in a tight loop"
                    .to_string(),
            });
        }

        issues
    }
}
