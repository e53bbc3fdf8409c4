//! Configuration file loading for agent-debate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEBATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. Global: `$XDG_CONFIG_HOME/agent-debate/config.toml`
//! 5. Default values
//!
//! Azure connection values left empty fall back to the standard Azure
//! environment variables when resolved.

mod file_config;
mod loader;

pub use file_config::{
    API_VERSION_ENV, DEFAULT_API_KEY_ENV, DEFAULT_API_VERSION, ENDPOINT_ENV,
    EXECUTOR_DEPLOYMENT_ENV, FileAgentsConfig, FileAzureConfig, FileBehaviorConfig, FileConfig,
    FileLoggingConfig, ResolvedAzureConfig, UTILITY_DEPLOYMENT_ENV,
};
pub use loader::ConfigLoader;
