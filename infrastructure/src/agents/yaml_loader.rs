//! YAML agent definition loader

use debate_domain::AgentDefinition;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const BUILTIN_WRITER: &str = include_str!("../../agents/writer.yaml");
const BUILTIN_CRITIC: &str = include_str!("../../agents/critic.yaml");

/// Errors raised while loading an agent definition
#[derive(Debug, Error)]
pub enum AgentLoadError {
    #[error("Failed to read agent file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse agent definition {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Agent definition {origin} has an empty name")]
    EmptyName { origin: String },
}

/// Loads [`AgentDefinition`]s from YAML files
pub struct YamlAgentLoader;

impl YamlAgentLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<AgentDefinition, AgentLoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| AgentLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Loading agent definition");
        Self::parse(&source, &path.display().to_string())
    }

    /// Parse a definition; `origin` names the source in errors
    pub fn parse(source: &str, origin: &str) -> Result<AgentDefinition, AgentLoadError> {
        let definition: AgentDefinition =
            serde_yaml::from_str(source).map_err(|source| AgentLoadError::Parse {
                origin: origin.to_string(),
                source,
            })?;

        if definition.name.trim().is_empty() {
            return Err(AgentLoadError::EmptyName {
                origin: origin.to_string(),
            });
        }
        Ok(definition)
    }

    /// The bundled Writer definition
    pub fn builtin_writer() -> Result<AgentDefinition, AgentLoadError> {
        Self::parse(BUILTIN_WRITER, "builtin:writer")
    }

    /// The bundled Critic definition
    pub fn builtin_critic() -> Result<AgentDefinition, AgentLoadError> {
        Self::parse(BUILTIN_CRITIC, "builtin:critic")
    }

    /// Load `path` when given, otherwise fall back to `builtin`
    pub fn load_or(
        path: Option<&Path>,
        builtin: fn() -> Result<AgentDefinition, AgentLoadError>,
    ) -> Result<AgentDefinition, AgentLoadError> {
        match path {
            Some(path) => Self::load(path),
            None => builtin(),
        }
    }
}
