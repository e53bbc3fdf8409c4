//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of every debate event
    pub conversation_log: Option<PathBuf>,
    /// Directory for rolling diagnostic log files
    pub log_dir: Option<PathBuf>,
}
