//! CLI command definitions

use clap::{Parser, ValueEnum};
use debate_domain::DebateSettings;
use std::path::PathBuf;

/// How debate results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status lines on stderr, the final draft on stdout
    Text,
    /// The final turn as a JSON object
    Json,
    /// Raw event stream: status lines as text, the result as one JSON line
    Events,
}

/// How the next speaker is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionMode {
    /// Ask the executor model
    Model,
    /// Rotate through the roster in order
    RoundRobin,
}

/// How critique scores are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoringMode {
    /// Ask the utility model
    Model,
    /// Match score patterns such as "8/10" locally
    Pattern,
}

/// CLI arguments for agent-debate
#[derive(Parser, Debug)]
#[command(name = "agent-debate")]
#[command(author, version, about = "Writer/Critic debate - iterate a draft until it scores well")]
#[command(long_about = r#"
Agent Debate improves an answer by letting two agents argue over it.

A Writer drafts the answer, a Critic evaluates and scores it, and the
Writer revises. The debate stops when a critique scores at or above the
passing score, or when the iteration cap is reached. The latest Writer
draft is the result.

Configuration files are loaded from (in priority order):
1. DEBATE_* environment variables
2. --config <path>     Explicit config file
3. ./debate.toml       Project-level config
4. ~/.config/agent-debate/config.toml   Global config

Azure connection settings fall back to AZURE_OPENAI_ENDPOINT,
AZURE_OPENAI_API_VERSION, EXECUTOR_AZURE_OPENAI_DEPLOYMENT_NAME,
UTILITY_AZURE_OPENAI_DEPLOYMENT_NAME and AZURE_OPENAI_API_KEY.

Example:
  agent-debate "Write a product announcement for our new CLI"
  agent-debate --conversation chat.json --output events
  agent-debate --selection round-robin --scoring pattern -vv "Summarize RFC 9110"
"#)]
pub struct Cli {
    /// Request appended to the conversation as a user message
    pub prompt: Option<String>,

    /// JSON file with prior messages (`[{"role", "name"?, "content"}]`), `-` for stdin
    #[arg(long, value_name = "FILE")]
    pub conversation: Option<PathBuf>,

    /// Caller identity used in the session id
    #[arg(short, long, env = "DEBATE_USER", default_value = "anonymous")]
    pub user: String,

    /// Maximum number of debate turns
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,

    /// Score (0-10) at or above which the debate stops
    #[arg(long, value_name = "SCORE")]
    pub passing_score: Option<f64>,

    /// Speaker selection strategy
    #[arg(long, value_enum, default_value = "model")]
    pub selection: SelectionMode,

    /// Score extraction strategy
    #[arg(long, value_enum, default_value = "model")]
    pub scoring: ScoringMode,

    /// Run the critic as a hosted agent
    #[arg(long)]
    pub hosted_critic: bool,

    /// Timeout in seconds for each model call
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Append a JSONL transcript of the debate to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Also write diagnostic logs to daily files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of configured settings
    pub fn apply_overrides(&self, mut settings: DebateSettings) -> DebateSettings {
        if let Some(max) = self.max_iterations {
            settings = settings.with_max_iterations(max);
        }
        if let Some(score) = self.passing_score {
            settings = settings.with_passing_score(score);
        }
        settings
    }

    /// `tracing` filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
