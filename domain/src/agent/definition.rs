//! Declarative agent definition

use crate::core::model::ModelRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-service execution settings as written in agent files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSettings {
    pub temperature: Option<f32>,
}

/// Declarative description of a debate participant.
///
/// ```yaml
/// name: Writer
/// description: Drafts and revises the answer.
/// instructions: |
///   You are a writer...
/// execution_settings:
///   executor:
///     temperature: 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    /// Model role used for this agent's turns. Inferred from
    /// `execution_settings` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Deployment for remotely hosted agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub execution_settings: BTreeMap<String, ExecutionSettings>,
}

impl AgentDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instructions: String::new(),
            model: None,
            temperature: None,
            deployment: None,
            execution_settings: BTreeMap::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_model(mut self, model: ModelRole) -> Self {
        self.model = Some(model);
        self
    }

    /// Model role for this agent: explicit `model`, else the first
    /// `execution_settings` key naming a role, else the executor.
    pub fn model_role(&self) -> ModelRole {
        self.model
            .or_else(|| {
                self.execution_settings
                    .keys()
                    .find_map(|k| k.parse::<ModelRole>().ok())
            })
            .unwrap_or_default()
    }

    /// Sampling temperature: explicit value, else the one configured for
    /// the resolved model role in `execution_settings`.
    pub fn temperature_for_role(&self) -> Option<f32> {
        self.temperature.or_else(|| {
            self.execution_settings
                .get(self.model_role().as_str())
                .and_then(|s| s.temperature)
        })
    }

    /// `name: description` line used in selection prompts
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}
