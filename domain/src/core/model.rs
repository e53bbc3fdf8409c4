//! Model role value object

use serde::{Deserialize, Serialize};

/// Named chat-completion capability (Value Object)
///
/// Each role maps to one deployment. The executor handles cognitive work
/// (speaker selection, agent turns); the utility model handles cheap
/// extraction and summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelRole {
    #[default]
    Executor,
    Utility,
}

impl ModelRole {
    /// Get the string identifier for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelRole::Executor => "executor",
            ModelRole::Utility => "utility",
        }
    }

    pub fn all() -> [ModelRole; 2] {
        [ModelRole::Executor, ModelRole::Utility]
    }
}

impl std::fmt::Display for ModelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "executor" => Ok(ModelRole::Executor),
            "utility" => Ok(ModelRole::Utility),
            other => Err(format!("unknown model role: {}", other)),
        }
    }
}
