//! Behavior configuration from TOML (`[behavior]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Timeout in seconds for each model call
    pub timeout_seconds: Option<u64>,
}
